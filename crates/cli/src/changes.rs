// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Changed-line extraction via `git difftool`.
//!
//! The inner diff command prints only the new-side line number of each
//! inserted or changed line, so a file's changed-line set is just the
//! whitespace-separated numbers on stdout. Numbers stay as text: they are
//! only ever compared against text captured from linter output.

use std::collections::BTreeSet;
use std::path::Path;

use crate::env::ProcessEnv;

/// Inner diff command handed to `git difftool -x`. difftool runs it through
/// a shell with the old and new file appended, hence the inner quoting.
const DIFF_LINE_NUMBERS: &str =
    "diff --new-line-format='%dn ' --unchanged-line-format= --changed-group-format='%>'";

/// Set of changed line numbers for one file, kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSet {
    /// Universal set: every line counts as changed (whole-repository mode).
    All,
    /// Exact set of changed line numbers.
    Lines(BTreeSet<String>),
}

impl LineSet {
    /// Build an exact set from line-number strings.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// Membership test against the text of a reported line number.
    pub fn contains(&self, lineno: &str) -> bool {
        match self {
            Self::All => true,
            Self::Lines(set) => set.contains(lineno),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::All => false,
            Self::Lines(set) => set.is_empty(),
        }
    }
}

/// Extract the set of added/changed line numbers for `file`.
///
/// With a revision, one diff against it. Without, the working-tree diff and
/// the staged (`--cached`) diff are unioned. A failing diff invocation
/// yields no lines rather than an error: a file whose diff fails simply has
/// all its diagnostics suppressed downstream.
pub fn changed_lines(
    git: &Path,
    env: &ProcessEnv,
    root: &Path,
    file: &str,
    revision: Option<&str>,
) -> LineSet {
    let mut lines = BTreeSet::new();
    match revision {
        Some(rev) => collect_lines(&run_difftool(git, env, root, &[rev], file), &mut lines),
        None => {
            collect_lines(&run_difftool(git, env, root, &[], file), &mut lines);
            collect_lines(&run_difftool(git, env, root, &["--cached"], file), &mut lines);
        }
    }
    LineSet::Lines(lines)
}

fn collect_lines(output: &str, into: &mut BTreeSet<String>) {
    into.extend(output.split_whitespace().map(str::to_string));
}

fn run_difftool(git: &Path, env: &ProcessEnv, root: &Path, extra: &[&str], file: &str) -> String {
    let mut cmd = env.command(git);
    cmd.current_dir(root)
        .args(["difftool", "-y", "-x", DIFF_LINE_NUMBERS])
        .args(extra)
        .arg("--")
        .arg(file);

    match cmd.output() {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).into_owned(),
        Ok(out) => {
            tracing::debug!(
                "difftool exited with {:?} for {}, treating as no changed lines",
                out.status.code(),
                file
            );
            String::new()
        }
        Err(e) => {
            tracing::debug!("failed to run difftool for {}: {}", file, e);
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "changes_tests.rs"]
mod tests;
