//! Show command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::handlers::load_product;
use crate::presentation::{ProductSummaryOpts, display_product_summary};

pub async fn execute(ctx: &CliContext, id: &str) -> Result<()> {
    let product = load_product(ctx, id).await?;
    display_product_summary(&product, &ProductSummaryOpts::with_title("Product:"));
    Ok(())
}
