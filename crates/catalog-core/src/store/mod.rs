//! Client-side cache and synchronization layer.

mod record_store;
mod status;

pub use record_store::{Lookup, PendingFetch, RecordStore, StoreState};
pub use status::{Operation, OperationStatus};
