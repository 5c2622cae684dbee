// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linter subprocess invocation.
//!
//! One invocation per file, with the file path as first positional argument
//! followed by any special-case arguments. Linters conventionally exit
//! non-zero when they find issues; only a non-zero exit with no output at
//! all means the tool itself failed.

use std::path::Path;

use crate::config::SpecialCase;
use crate::env::ProcessEnv;

/// Invokes the resolved linter executable on candidate files.
pub struct LintRunner<'a> {
    exe: &'a Path,
    env: &'a ProcessEnv,
    special_cases: &'a [SpecialCase],
}

impl<'a> LintRunner<'a> {
    pub fn new(exe: &'a Path, env: &'a ProcessEnv, special_cases: &'a [SpecialCase]) -> Self {
        Self {
            exe,
            env,
            special_cases,
        }
    }

    /// Extra arguments for `path`: the rules are scanned in declared order
    /// and the first pattern found anywhere within the path wins. Paths
    /// matching no rule get no extra arguments.
    pub fn select_args(&self, path: &str) -> &[String] {
        for rule in self.special_cases {
            if rule.pattern.is_match(path) {
                return &rule.args;
            }
        }
        &[]
    }

    /// Run the linter over one file and return its stdout in full.
    ///
    /// Non-zero exit with output is "issues found" and the output is used
    /// as-is. Non-zero exit with empty output means the linter errored out;
    /// that anomaly is logged and the file yields no diagnostics.
    pub fn lint_file(&self, root: &Path, path: &str) -> String {
        let args = self.select_args(path);
        let mut cmd = self.env.command(self.exe);
        cmd.current_dir(root).arg(path).args(args);
        tracing::trace!("running {:?}", cmd);

        match cmd.output() {
            Ok(out) => {
                let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
                if !out.status.success() && stdout.is_empty() {
                    let stderr = String::from_utf8_lossy(&out.stderr);
                    let excerpt: String = stderr.lines().take(10).collect::<Vec<_>>().join("\n");
                    tracing::warn!(
                        "linter exited with {:?} on {} without producing output: {}",
                        out.status.code(),
                        path,
                        excerpt
                    );
                }
                stdout
            }
            Err(e) => {
                tracing::warn!("failed to run linter on {}: {}", path, e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
