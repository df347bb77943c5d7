//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: filtering and sorting belong to
//! `catalog_core::project`, state changes to the store.

pub mod confirm;
pub mod product_display;
pub mod tables;

// Re-export commonly used items
pub use confirm::{DeletionOutcome, PendingDeletion};
pub use product_display::{ProductSummaryOpts, display_product_summary, format_product_summary};
pub use tables::{format_models, format_price, render_product_table, truncate_string};
