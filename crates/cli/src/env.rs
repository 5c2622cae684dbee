// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Immutable snapshot of the caller's process environment.
//!
//! Captured once at startup and passed explicitly into every subprocess
//! invocation, so no call site depends on ambient global state.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::Command;

/// Snapshot of environment variables at startup.
#[derive(Debug, Clone)]
pub struct ProcessEnv {
    vars: Vec<(OsString, OsString)>,
}

impl ProcessEnv {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os().collect(),
        }
    }

    /// Build a snapshot from explicit variables. Test seam.
    pub fn from_vars(vars: Vec<(OsString, OsString)>) -> Self {
        Self { vars }
    }

    /// Look up a variable by name.
    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_os_str())
    }

    /// Directories of the executable search path, in order.
    pub fn search_path(&self) -> Vec<PathBuf> {
        self.get("PATH")
            .map(|path| std::env::split_paths(path).collect())
            .unwrap_or_default()
    }

    /// Extensions to probe in addition to the bare name (the `PATHEXT`
    /// mechanism). Empty everywhere the variable is unset.
    pub fn executable_extensions(&self) -> Vec<String> {
        self.get("PATHEXT")
            .map(|raw| {
                raw.to_string_lossy()
                    .split(';')
                    .filter(|ext| !ext.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Build a Command that sees exactly this snapshot and nothing else.
    pub fn command(&self, program: impl AsRef<OsStr>) -> Command {
        let mut cmd = Command::new(program);
        cmd.env_clear();
        cmd.envs(self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str())));
        cmd
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
