pub mod changes;
pub mod cli;
pub mod completions;
pub mod config;
pub mod diagnostics;
pub mod discovery;
pub mod env;
pub mod error;
pub mod files;
pub mod linter;
pub mod runner;
pub mod which;

pub use changes::LineSet;
pub use cli::Cli;
pub use config::{Config, Filters, SpecialCase};
pub use diagnostics::Diagnostic;
pub use env::ProcessEnv;
pub use error::{Error, ExitCode, Result};
pub use linter::LintRunner;
