// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The check_files pipeline.
//!
//! Orchestrates tool resolution, candidate enumeration, per-file changed-line
//! extraction, lint invocation, and diagnostic filtering. Per-file work is
//! independent and fans out on rayon; survivors are collected per file and
//! printed in enumeration order, so output and exit status are identical to
//! a sequential run.
//!
//! No error propagates past check_files except the controlled exit code:
//! subprocess failures are handled at the call that performs them.

use std::path::Path;

use rayon::prelude::*;

use crate::changes::{self, LineSet};
use crate::cli::Cli;
use crate::config::{self, Config, Filters};
use crate::diagnostics;
use crate::discovery;
use crate::env::ProcessEnv;
use crate::error::ExitCode;
use crate::files;
use crate::linter::LintRunner;
use crate::which;

/// Everything one file's pipeline needs, shared across the rayon pool.
struct FileContext<'a> {
    git: &'a Path,
    env: &'a ProcessEnv,
    root: &'a Path,
    filters: &'a Filters,
    lint: &'a LintRunner<'a>,
    revision: Option<&'a str>,
    all: bool,
}

/// Run the whole pipeline and reduce to an exit code.
pub fn check_files(cli: &Cli) -> anyhow::Result<ExitCode> {
    let env = ProcessEnv::capture();
    let cwd = std::env::current_dir()?;

    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let filters = Filters::compile(&config.filter)?;
    let special_cases = config::compile_special_cases(&config.special_case)?;

    // Both tools must resolve before any file is processed.
    let git = which::resolve(&config.tools.git, &env)?;
    let linter = which::resolve(&config.tools.linter, &env)?;
    tracing::info!("using {} and {}", git.display(), linter.display());

    let root = files::repo_root(&git, &env, &cwd).unwrap_or_else(|| {
        tracing::debug!("not inside a git work tree, using {}", cwd.display());
        cwd.clone()
    });

    // `revision` stays None unless the parent-commit fallback fires; when it
    // does, changed lines are computed against the same revision.
    let mut revision = None;
    let candidates = if cli.all {
        files::all_files(&root)
    } else {
        let mut found = files::changed_files(&git, &env, &root, None);
        if found.is_empty() {
            if let Some(parent) = files::head_parent(&git, &env, &root) {
                found = files::changed_files(&git, &env, &root, Some(&parent));
                revision = Some(parent);
            }
        }
        found
    };
    tracing::info!("{} candidate file(s)", candidates.len());

    let lint = LintRunner::new(&linter, &env, &special_cases);
    let ctx = FileContext {
        git: &git,
        env: &env,
        root: &root,
        filters: &filters,
        lint: &lint,
        revision: revision.as_deref(),
        all: cli.all,
    };

    let survivors: Vec<Vec<String>> = candidates
        .par_iter()
        .map(|path| check_file(&ctx, path))
        .collect();

    let mut failed = false;
    for lines in &survivors {
        for line in lines {
            println!("{}", line);
            failed = true;
        }
    }

    Ok(if failed {
        ExitCode::DiagnosticsFound
    } else {
        ExitCode::Success
    })
}

/// One file's pipeline: prefilter, changed lines, lint, filter.
fn check_file(ctx: &FileContext, path: &str) -> Vec<String> {
    if !ctx.filters.should_check(path) {
        tracing::debug!("skipping {}", path);
        return Vec::new();
    }

    let lines = if ctx.all {
        LineSet::All
    } else {
        changes::changed_lines(ctx.git, ctx.env, ctx.root, path, ctx.revision)
    };
    tracing::trace!("{}: changed lines {:?}", path, lines);

    let output = ctx.lint.lint_file(ctx.root, path);
    diagnostics::filter_output(&output, &lines)
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
