//! Update command handler.
//!
//! Loads the current record, applies the requested edits and submits the
//! full record.

use anyhow::Result;
use catalog_core::{CompatibleModel, Operation, Product, ProductCategory};

use crate::bootstrap::CliContext;
use crate::handlers::add::{unique_models, validate_price};
use crate::handlers::{failure, load_product};
use crate::error::CliError;
use crate::presentation::{ProductSummaryOpts, display_product_summary};

/// Arguments for the update command.
#[derive(Debug, Clone, Default)]
pub struct UpdateArgs {
    pub id: String,
    pub name: Option<String>,
    pub category: Option<ProductCategory>,
    pub price: Option<f64>,
    pub stock: Option<u64>,
    pub description: Option<String>,
    pub models: Vec<CompatibleModel>,
    pub clear_models: bool,
}

/// Apply the edits in `args` to a copy of `existing`.
///
/// Returns `Ok(None)` when the result equals `existing`.
pub fn apply_edits(existing: &Product, args: &UpdateArgs) -> Result<Option<Product>, CliError> {
    let mut edited = existing.clone();

    if let Some(name) = &args.name {
        let name = name.trim();
        if name.is_empty() {
            return Err(CliError::Arguments("name must not be empty".into()));
        }
        edited.name = name.to_string();
    }
    if let Some(category) = args.category {
        edited.category = category;
    }
    if let Some(price) = args.price {
        validate_price(price)?;
        edited.price = price;
    }
    if let Some(stock) = args.stock {
        edited.stock = stock;
    }
    if let Some(description) = &args.description {
        edited.description = description.trim().to_string();
    }
    if args.clear_models {
        edited.compatible_models.clear();
    } else if !args.models.is_empty() {
        edited.compatible_models = unique_models(args.models.clone());
    }

    Ok((edited != *existing).then_some(edited))
}

/// Execute the update command.
pub async fn execute(ctx: &CliContext, args: UpdateArgs) -> Result<()> {
    let existing = load_product(ctx, &args.id).await?;
    let Some(edited) = apply_edits(&existing, &args)? else {
        println!("Nothing to update for product {}.", existing.id);
        return Ok(());
    };

    let Some(updated) = ctx.store().update(&edited).await else {
        return Err(failure(ctx, Operation::Update));
    };

    display_product_summary(&updated, &ProductSummaryOpts::with_title("Product updated:"));
    Ok(())
}
