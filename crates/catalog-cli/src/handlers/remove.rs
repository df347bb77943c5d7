//! Remove command handler.
//!
//! Shows the product, asks for confirmation unless `--yes` was given, then
//! resolves the [`PendingDeletion`].

use anyhow::Result;
use catalog_core::Operation;

use crate::bootstrap::CliContext;
use crate::handlers::{failure, load_product};
use crate::presentation::{
    DeletionOutcome, PendingDeletion, ProductSummaryOpts, display_product_summary,
};
use crate::utils::input;

/// Execute the remove command.
///
/// # Errors
///
/// Fails when the product cannot be loaded, the prompt cannot be read, or the
/// delete is rejected.
pub async fn execute(ctx: &CliContext, id: &str, yes: bool) -> Result<()> {
    let pending = PendingDeletion::new(load_product(ctx, id).await?);

    let confirmed = if yes {
        true
    } else {
        display_product_summary(pending.product(), &ProductSummaryOpts::for_removal());
        println!();
        input::prompt_confirmation("Remove this product from the catalog?")?
    };

    resolve(ctx, pending, confirmed).await
}

/// Confirm or cancel `pending` and report the outcome.
pub async fn resolve(ctx: &CliContext, pending: PendingDeletion, confirmed: bool) -> Result<()> {
    let outcome = if confirmed {
        pending.confirm(ctx.store()).await
    } else {
        pending.cancel()
    };

    match outcome {
        DeletionOutcome::Deleted(product) => {
            println!("Product '{}' (ID {}) removed.", product.name, product.id);
            Ok(())
        }
        DeletionOutcome::Cancelled(_) => {
            println!("Remove cancelled.");
            Ok(())
        }
        DeletionOutcome::Failed(_) => Err(failure(ctx, Operation::Delete)),
    }
}
