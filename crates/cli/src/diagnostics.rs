// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic micro-format parsing and changed-line filtering.
//!
//! A reportable diagnostic is a line starting `path:line:column: `. Anything
//! else in linter output (headers, summaries, progress noise) is dropped
//! without a warning. Line numbers are captured as text and compared as
//! text, so nothing is lost to numeric conversion.

use std::sync::LazyLock;

use regex::Regex;

use crate::changes::LineSet;

static DIAGNOSTIC_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\s]+):(\d+):(\d+): ").expect("valid regex"));

/// Location fields parsed out of one diagnostic line. Borrows from the raw
/// output; the line itself is always emitted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic<'a> {
    pub path: &'a str,
    pub line: &'a str,
    pub column: &'a str,
}

/// Parse one output line; `None` for anything that isn't a diagnostic.
pub fn parse_line(line: &str) -> Option<Diagnostic<'_>> {
    let caps = DIAGNOSTIC_LINE.captures(line)?;
    Some(Diagnostic {
        path: caps.get(1)?.as_str(),
        line: caps.get(2)?.as_str(),
        column: caps.get(3)?.as_str(),
    })
}

/// Keep only the diagnostic lines whose reported line number is in `lines`,
/// verbatim and in their original order.
pub fn filter_output<'a>(output: &'a str, lines: &LineSet) -> Vec<&'a str> {
    output
        .lines()
        .filter(|raw| parse_line(raw).is_some_and(|d| lines.contains(d.line)))
        .collect()
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
