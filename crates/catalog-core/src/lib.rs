//! Core of the product catalog: domain types, the remote collection port,
//! the [`RecordStore`] cache, and [`view::project`] for presentation.
//!
//! Infrastructure lives elsewhere: `catalog-http` implements
//! [`ProductApiPort`] over HTTP, `catalog-cli` wires everything together.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod store;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use domain::{
    CompatibleModel, Product, ProductCategory, ProductDraft, RawProduct, UnknownVariant, normalize,
};
pub use ports::{ApiPortError, ApiPortResult, ProductApiPort};
pub use store::{Lookup, Operation, OperationStatus, PendingFetch, RecordStore, StoreState};
pub use view::{SortDirection, SortField, ViewQuery, project};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
