use std::path::PathBuf;

/// lintdiff error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required external tool missing from the search path
    #[error("required tool not found on the search path: {name}")]
    ToolNotFound { name: String },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid filter or special-case pattern
    #[error("invalid pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using lintdiff Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No diagnostic survived filtering
    Success = 0,
    /// At least one diagnostic landed on a changed line
    DiagnosticsFound = 1,
    /// Configuration error or required tool not resolvable
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::ToolNotFound { .. } | Error::Config { .. } | Error::Pattern { .. } => {
                ExitCode::ConfigError
            }
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
