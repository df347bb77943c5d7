//! Presentation-side projections over the store's snapshot.

mod collation;
mod projection;

pub use collation::collate;
pub use projection::{SortDirection, SortField, ViewQuery, project};
