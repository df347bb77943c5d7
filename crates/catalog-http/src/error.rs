//! Internal error types for catalog HTTP operations.
//!
//! These errors are internal to `catalog-http` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for catalog HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a non-success status.
    #[error("Catalog request failed with status {status}: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Response body, when one was sent
        body: Option<String>,
    },

    /// Connection refused, DNS failure or timeout.
    #[error("Catalog server unreachable: {message}")]
    Unreachable { message: String },

    /// Any other failure inside the HTTP client.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    /// A success response whose body has the wrong shape.
    #[error("Invalid response from catalog server: {message}")]
    Decode { message: String },

    /// A request body could not be serialized.
    #[error("Failed to encode request body: {message}")]
    Encode { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
