// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

/// Run a linter over a git change set and report only diagnostics on changed lines
#[derive(Parser)]
#[command(name = "lintdiff")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase logging detail (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Check every file under the repository root instead of only changed lines
    #[arg(long)]
    pub all: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "LINTDIFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
