// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Candidate-file enumeration.
//!
//! Three modes: files differing from an explicit revision, files differing
//! in the working tree plus the staged index (the default), and every file
//! under the repository root (`--all`). Paths are repository-root-relative
//! throughout.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::env::ProcessEnv;

/// Resolve the repository root for the directory `cwd` sits in.
pub fn repo_root(git: &Path, env: &ProcessEnv, cwd: &Path) -> Option<PathBuf> {
    let out = rev_parse(git, env, cwd, "--show-toplevel")?;
    Some(PathBuf::from(out))
}

/// Parent of the current head, used as the fallback diff base when neither
/// the working tree nor the index has any pending changes.
pub fn head_parent(git: &Path, env: &ProcessEnv, root: &Path) -> Option<String> {
    rev_parse(git, env, root, "HEAD^")
}

fn rev_parse(git: &Path, env: &ProcessEnv, dir: &Path, arg: &str) -> Option<String> {
    let mut cmd = env.command(git);
    cmd.current_dir(dir).args(["rev-parse", arg]);
    match cmd.output() {
        Ok(out) if out.status.success() => {
            let text = String::from_utf8_lossy(&out.stdout).trim().to_string();
            (!text.is_empty()).then_some(text)
        }
        Ok(out) => {
            tracing::debug!("rev-parse {} exited with {:?}", arg, out.status.code());
            None
        }
        Err(e) => {
            tracing::debug!("failed to run rev-parse {}: {}", arg, e);
            None
        }
    }
}

/// Files that differ from `revision`, or from the working tree plus the
/// staged index when no revision is given. De-duplicated, first-seen order.
pub fn changed_files(
    git: &Path,
    env: &ProcessEnv,
    root: &Path,
    revision: Option<&str>,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    let mut take = |listed: Vec<String>| {
        for file in listed {
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    };

    match revision {
        Some(rev) => take(name_only(git, env, root, &[rev])),
        None => {
            take(name_only(git, env, root, &[]));
            take(name_only(git, env, root, &["--cached"]));
        }
    }
    files
}

fn name_only(git: &Path, env: &ProcessEnv, root: &Path, extra: &[&str]) -> Vec<String> {
    let mut cmd = env.command(git);
    cmd.current_dir(root)
        .args(["diff", "--name-only"])
        .args(extra);

    match cmd.output() {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Ok(out) => {
            tracing::warn!(
                "git diff --name-only {:?} exited with {:?}, treating as no changed files",
                extra,
                out.status.code()
            );
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("failed to run git diff --name-only: {}", e);
            Vec::new()
        }
    }
}

/// Every file under `root`, relative to it, sorted for deterministic
/// output. Hidden entries (including `.git/`) are skipped; gitignore rules
/// are not applied, since this mode means "every file".
pub fn all_files(root: &Path) -> Vec<String> {
    let walker = WalkBuilder::new(root)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .require_git(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("walk error: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        files.push(relative.to_string_lossy().into_owned());
    }
    files.sort();
    files
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
