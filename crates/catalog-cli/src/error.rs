//! CLI-specific error types and exit codes.

use catalog_core::Operation;
use catalog_core::ports::{
    BAD_REQUEST_MESSAGE, NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE, UNREACHABLE_MESSAGE,
};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A store operation failed; `message` is the store's status error.
    #[error("{operation} failed: {message}")]
    Operation {
        operation: Operation,
        message: String,
    },

    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (terminal closed, stdin unreadable).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Build an operation failure from the store's status error.
    pub fn operation(operation: Operation, message: Option<String>) -> Self {
        Self::Operation {
            operation,
            message: message.unwrap_or_else(|| "no details were reported".to_string()),
        }
    }

    /// Map error to an exit code.
    ///
    /// Operation failures are keyed on the classified status message, the
    /// rest follow sysexits.h.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Operation { message, .. } => match message.as_str() {
                UNREACHABLE_MESSAGE => 69,  // EX_UNAVAILABLE
                BAD_REQUEST_MESSAGE => 65,  // EX_DATAERR
                NOT_FOUND_MESSAGE => 66,    // EX_NOINPUT
                SERVER_ERROR_MESSAGE => 75, // EX_TEMPFAIL
                _ => 1,
            },
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
