// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lintdiff CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use lintdiff::cli::Cli;
use lintdiff::error::ExitCode;

/// Initialize tracing. `LINTDIFF_LOG` takes precedence over `-v` counts
/// so scripted invocations can pin an exact filter.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env("LINTDIFF_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("lintdiff: {}", e);
            match e.downcast_ref::<lintdiff::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    if let Some(shell) = cli.completions {
        lintdiff::completions::print(shell);
        return Ok(ExitCode::Success);
    }

    lintdiff::runner::check_files(cli)
}
