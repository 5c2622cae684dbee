// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Executable resolution on the search path.
//!
//! Both external tools (git and the linter) are resolved once at startup.
//! Resolution failure is fatal: nothing is checked without both tools.

use std::path::{Path, PathBuf};

use crate::env::ProcessEnv;
use crate::error::{Error, Result};

/// Probe every search-path directory for `name` (and `name + ext` for each
/// extension) and return all matching executable paths, in path order.
pub fn search_path(name: &str, dirs: &[PathBuf], exts: &[String]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for dir in dirs {
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            found.push(candidate);
        }
        for ext in exts {
            let with_ext = dir.join(format!("{name}{ext}"));
            if is_executable(&with_ext) {
                found.push(with_ext);
            }
        }
    }
    found
}

/// Resolve `name` to an absolute path; the first match is authoritative.
pub fn resolve(name: &str, env: &ProcessEnv) -> Result<PathBuf> {
    let dirs = env.search_path();
    let exts = env.executable_extensions();
    search_path(name, &dirs, &exts)
        .into_iter()
        .next()
        .ok_or_else(|| Error::ToolNotFound {
            name: name.to_string(),
        })
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
#[path = "which_tests.rs"]
mod tests;
