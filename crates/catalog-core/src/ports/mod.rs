//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.

mod error;
mod product_api;

pub use error::{
    ApiPortError, ApiPortResult, BAD_REQUEST_MESSAGE, NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE,
    UNREACHABLE_MESSAGE,
};
pub use product_api::ProductApiPort;

#[cfg(test)]
pub use product_api::MockProductApiPort;
