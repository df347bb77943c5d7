//! Two-step delete confirmation.
//!
//! A [`PendingDeletion`] is created when the user asks to remove a product and
//! is consumed by exactly one of [`PendingDeletion::confirm`] or
//! [`PendingDeletion::cancel`]. Nothing is sent to the server until
//! `confirm` runs.

use catalog_core::{Product, RecordStore};
use tracing::debug;

/// Outcome of a resolved deletion request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeletionOutcome {
    Deleted(Product),
    /// The store reported a failure; details are in its status.
    Failed(Product),
    Cancelled(Product),
}

#[derive(Debug, Clone, PartialEq)]
#[must_use = "a pending deletion does nothing until confirmed or cancelled"]
pub struct PendingDeletion {
    product: Product,
}

impl PendingDeletion {
    pub const fn new(product: Product) -> Self {
        Self { product }
    }

    /// The product awaiting confirmation.
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Issue the delete through the store.
    pub async fn confirm(self, store: &RecordStore) -> DeletionOutcome {
        debug!(id = %self.product.id, "Deletion confirmed");
        if store.delete(&self.product.id).await {
            DeletionOutcome::Deleted(self.product)
        } else {
            DeletionOutcome::Failed(self.product)
        }
    }

    pub fn cancel(self) -> DeletionOutcome {
        debug!(id = %self.product.id, "Deletion cancelled");
        DeletionOutcome::Cancelled(self.product)
    }
}
