//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Validate CLI-specific input, call one or two store operations, then
//!   format the outcome for the terminal.
//! - A failed operation is read back from the store's status and returned as
//!   [`CliError::Operation`].

use anyhow::Result;
use catalog_core::{Lookup, Operation, Product};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub mod add;
pub mod list;
pub mod options;
pub mod remove;
pub mod show;
pub mod update;

/// The store's current error for `operation`, as a CLI error.
pub(crate) fn failure(ctx: &CliContext, operation: Operation) -> anyhow::Error {
    CliError::operation(operation, ctx.store().status().error).into()
}

/// Resolve a product by id: from cache when present, else with one fetch.
pub(crate) async fn load_product(ctx: &CliContext, id: &str) -> Result<Product> {
    let lookup = ctx.store().get_by_id(id);
    if matches!(lookup, Lookup::Fetching(_)) {
        debug!(id, "Product not cached, fetching");
    }
    lookup
        .resolve()
        .await
        .ok_or_else(|| failure(ctx, Operation::Get))
}
