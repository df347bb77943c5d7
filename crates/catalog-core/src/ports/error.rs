//! Error types for product API port operations.

use thiserror::Error;

/// Shown when no response could be obtained from the server.
pub const UNREACHABLE_MESSAGE: &str =
    "Unable to reach the server. Check your connection and try again.";

/// Shown when the server rejected the request as malformed.
pub const BAD_REQUEST_MESSAGE: &str =
    "The request was rejected as invalid. Review the submitted data.";

/// Shown when the requested product does not exist.
pub const NOT_FOUND_MESSAGE: &str = "The requested product does not exist.";

/// Shown when the server failed while handling the request.
pub const SERVER_ERROR_MESSAGE: &str =
    "The server encountered an error. Please try again later.";

/// Errors from product API port operations.
///
/// These are domain-level errors. Implementation-specific errors (HTTP, JSON)
/// are mapped to these by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiPortError {
    /// No response was reachable (connection refused, DNS, timeout).
    #[error("Server unreachable: {message}")]
    Unreachable {
        /// Description of the connectivity failure
        message: String,
    },

    /// The server rejected the request as malformed.
    #[error("Bad request: {message}")]
    BadRequest {
        /// Server-provided or adapter-provided detail
        message: String,
    },

    /// The requested resource does not exist.
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource path or id that was requested
        resource: String,
    },

    /// The server failed while handling the request.
    #[error("Server error (status {status})")]
    Server {
        /// HTTP status code
        status: u16,
    },

    /// The response could not be interpreted.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The adapter could not be configured.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },

    /// Anything the other variants do not cover.
    #[error("Unexpected error: {message}")]
    Unexpected {
        /// HTTP status code, when a response was received
        status: Option<u16>,
        /// Underlying error message
        message: String,
    },
}

impl ApiPortError {
    /// Classified, user-facing message stored in `OperationStatus::error`.
    pub fn status_message(&self) -> String {
        match self {
            Self::Unreachable { .. } => UNREACHABLE_MESSAGE.to_string(),
            Self::BadRequest { .. } => BAD_REQUEST_MESSAGE.to_string(),
            Self::NotFound { .. } => NOT_FOUND_MESSAGE.to_string(),
            Self::Server { .. } => SERVER_ERROR_MESSAGE.to_string(),
            Self::InvalidResponse { message }
            | Self::Configuration { message }
            | Self::Unexpected { message, .. } => {
                if message.is_empty() {
                    "An unexpected error occurred.".to_string()
                } else {
                    format!("An unexpected error occurred: {message}")
                }
            }
        }
    }
}

/// Result type alias for product API port operations.
pub type ApiPortResult<T> = Result<T, ApiPortError>;
