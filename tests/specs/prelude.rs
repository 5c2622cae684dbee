//! Test helpers for behavioral specifications.
//!
//! Provides temp projects with scratch git repositories and a deterministic
//! fake linter installed on a prepended PATH.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};

use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the lintdiff binary
pub fn lintdiff_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("lintdiff"))
}

/// Temporary test project directory with helper methods.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Write lintdiff.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("lintdiff.toml"), content).unwrap();
    }
}

// =============================================================================
// GIT TEST HELPERS
// =============================================================================

/// Initialize a git repo with minimal config
pub fn git_init(project: &Project) {
    for args in [
        &["init", "-b", "main"][..],
        &["config", "user.email", "test@example.com"],
        &["config", "user.name", "Test User"],
    ] {
        Command::new("git")
            .args(args)
            .current_dir(project.path())
            .output()
            .expect("git should run");
    }
}

/// Stage everything and commit
pub fn git_commit_all(project: &Project, message: &str) {
    Command::new("git")
        .args(["add", "-A"])
        .current_dir(project.path())
        .output()
        .expect("git add should succeed");

    Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(project.path())
        .output()
        .expect("git commit should succeed");
}

// =============================================================================
// FAKE LINTER
// =============================================================================

/// A deterministic stand-in for flake8. Reports, per line of the checked
/// file: F401 when the line mentions an import, and E501 when the line is
/// longer than 20 characters (suppressed by `--ignore=E501`).
const FAKE_FLAKE8: &str = r#"#!/bin/sh
file="$1"; shift
ignore501=0
for arg in "$@"; do
  case "$arg" in
    --ignore=*E501*) ignore501=1 ;;
  esac
done
n=0
while IFS= read -r line; do
  n=$((n+1))
  case "$line" in
    *import*) printf '%s:%s:1: F401 unused import\n' "$file" "$n" ;;
  esac
  if [ "$ignore501" -eq 0 ] && [ "${#line}" -gt 20 ]; then
    printf '%s:%s:21: E501 line too long\n' "$file" "$n"
  fi
done < "$file"
"#;

/// Install the fake flake8 into `<project>/.bin` and return that directory.
#[cfg(unix)]
pub fn install_fake_linter(project: &Project) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let bin = project.path().join(".bin");
    std::fs::create_dir_all(&bin).unwrap();
    let exe = bin.join("flake8");
    std::fs::write(&exe, FAKE_FLAKE8).unwrap();
    std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();
    bin
}

/// PATH value with `bin` prepended to the caller's search path, so the fake
/// linter wins while git stays resolvable.
pub fn path_with(bin: &Path) -> std::ffi::OsString {
    let mut entries = vec![bin.to_path_buf()];
    if let Some(path) = std::env::var_os("PATH") {
        entries.extend(std::env::split_paths(&path));
    }
    std::env::join_paths(entries).expect("joinable PATH")
}
