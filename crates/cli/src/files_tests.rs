// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for candidate-file enumeration.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

use super::*;

// =============================================================================
// TEST HELPERS
// =============================================================================

fn git_path() -> PathBuf {
    PathBuf::from("git")
}

fn init_git_repo(temp: &TempDir) {
    for args in [
        &["init", "-b", "main"][..],
        &["config", "user.email", "test@example.com"],
        &["config", "user.name", "Test User"],
    ] {
        Command::new("git")
            .args(args)
            .current_dir(temp.path())
            .output()
            .expect("git should run");
    }
}

fn git(temp: &TempDir, args: &[&str]) {
    Command::new("git")
        .args(args)
        .current_dir(temp.path())
        .output()
        .expect("git should run");
}

fn write_file(temp: &TempDir, file: &str, content: &str) {
    let path = temp.path().join(file);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn commit_file(temp: &TempDir, file: &str, content: &str) {
    write_file(temp, file, content);
    git(temp, &["add", file]);
    git(temp, &["commit", "-m", "chore: update"]);
}

// =============================================================================
// REPOSITORY ROOT
// =============================================================================

#[test]
fn repo_root_resolves_from_a_subdirectory() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "app.py", "a = 1\n");
    std::fs::create_dir_all(temp.path().join("pkg/sub")).unwrap();

    let env = ProcessEnv::capture();
    let root = repo_root(&git_path(), &env, &temp.path().join("pkg/sub")).unwrap();
    assert_eq!(
        root.canonicalize().unwrap(),
        temp.path().canonicalize().unwrap()
    );
}

#[test]
fn repo_root_is_none_outside_a_repository() {
    let temp = TempDir::new().unwrap();
    let env = ProcessEnv::capture();
    assert!(repo_root(&git_path(), &env, temp.path()).is_none());
}

// =============================================================================
// HEAD PARENT
// =============================================================================

#[test]
fn head_parent_resolves_with_two_commits() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "app.py", "a = 1\n");
    commit_file(&temp, "app.py", "a = 2\n");

    let env = ProcessEnv::capture();
    let parent = head_parent(&git_path(), &env, temp.path()).unwrap();
    assert_eq!(parent.len(), 40);
}

#[test]
fn head_parent_is_none_for_the_initial_commit() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "app.py", "a = 1\n");

    let env = ProcessEnv::capture();
    assert!(head_parent(&git_path(), &env, temp.path()).is_none());
}

// =============================================================================
// CHANGED FILES
// =============================================================================

#[test]
fn lists_working_tree_changes_without_a_revision() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "app.py", "a = 1\n");

    write_file(&temp, "app.py", "a = 2\n");

    let env = ProcessEnv::capture();
    let files = changed_files(&git_path(), &env, temp.path(), None);
    assert_eq!(files, vec!["app.py".to_string()]);
}

#[test]
fn unions_staged_and_unstaged_without_duplicates() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "app.py", "a = 1\n");
    commit_file(&temp, "other.py", "b = 1\n");

    // app.py changed and staged, then changed again; other.py unstaged only
    write_file(&temp, "app.py", "a = 2\n");
    git(&temp, &["add", "app.py"]);
    write_file(&temp, "app.py", "a = 3\n");
    write_file(&temp, "other.py", "b = 2\n");

    let env = ProcessEnv::capture();
    let files = changed_files(&git_path(), &env, temp.path(), None);
    assert_eq!(
        files,
        vec!["app.py".to_string(), "other.py".to_string()]
    );
}

#[test]
fn clean_tree_lists_nothing() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "app.py", "a = 1\n");

    let env = ProcessEnv::capture();
    assert!(changed_files(&git_path(), &env, temp.path(), None).is_empty());
}

#[test]
fn lists_files_changed_since_a_revision() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "app.py", "a = 1\n");
    commit_file(&temp, "new.py", "n = 1\n");

    let env = ProcessEnv::capture();
    let files = changed_files(&git_path(), &env, temp.path(), Some("HEAD^"));
    assert_eq!(files, vec!["new.py".to_string()]);
}

#[test]
fn failing_enumeration_lists_nothing() {
    let temp = TempDir::new().unwrap();
    let env = ProcessEnv::capture();
    assert!(changed_files(&git_path(), &env, temp.path(), None).is_empty());
}

// =============================================================================
// WHOLE-REPOSITORY WALK
// =============================================================================

#[test]
fn all_files_walks_recursively_with_relative_sorted_paths() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "b.py", "b = 1\n");
    write_file(&temp, "a.py", "a = 1\n");
    write_file(&temp, "pkg/deep/mod.py", "m = 1\n");

    let files = all_files(temp.path());
    assert_eq!(
        files,
        vec![
            "a.py".to_string(),
            "b.py".to_string(),
            "pkg/deep/mod.py".to_string(),
        ]
    );
}

#[test]
fn all_files_skips_hidden_entries() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    commit_file(&temp, "app.py", "a = 1\n");
    write_file(&temp, ".hidden.py", "h = 1\n");

    let files = all_files(temp.path());
    assert_eq!(files, vec!["app.py".to_string()]);
}

#[test]
fn all_files_ignores_gitignore_rules() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    write_file(&temp, ".gitignore", "generated.py\n");
    write_file(&temp, "generated.py", "g = 1\n");
    write_file(&temp, "app.py", "a = 1\n");

    let files = all_files(temp.path());
    assert!(files.contains(&"app.py".to_string()));
    assert!(files.contains(&"generated.py".to_string()));
}
