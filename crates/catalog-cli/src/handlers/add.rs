//! Add command handler.

use std::collections::HashSet;

use anyhow::Result;
use catalog_core::{CompatibleModel, Operation, ProductCategory, ProductDraft};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::failure;
use crate::presentation::{ProductSummaryOpts, display_product_summary};

/// Arguments for the add command.
#[derive(Debug, Clone)]
pub struct AddArgs {
    pub name: String,
    pub category: ProductCategory,
    pub price: f64,
    pub stock: u64,
    pub description: String,
    pub models: Vec<CompatibleModel>,
}

/// Check the fields a user can get wrong and build the draft.
pub fn to_draft(args: AddArgs) -> Result<ProductDraft, CliError> {
    let name = args.name.trim().to_string();
    if name.is_empty() {
        return Err(CliError::Arguments("name must not be empty".into()));
    }
    validate_price(args.price)?;

    Ok(ProductDraft {
        name,
        category: args.category,
        price: args.price,
        stock: args.stock,
        description: args.description.trim().to_string(),
        compatible_models: unique_models(args.models),
    })
}

/// Drop repeated models, keeping first-seen order.
pub(crate) fn unique_models(mut models: Vec<CompatibleModel>) -> Vec<CompatibleModel> {
    let mut seen = HashSet::new();
    models.retain(|model| seen.insert(*model));
    models
}

pub(crate) fn validate_price(price: f64) -> Result<(), CliError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(CliError::Arguments(format!(
            "price must be a non-negative number, got {price}"
        )))
    }
}

/// Execute the add command.
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<()> {
    let draft = to_draft(args)?;
    let Some(created) = ctx.store().create(&draft).await else {
        return Err(failure(ctx, Operation::Create));
    };

    display_product_summary(&created, &ProductSummaryOpts::with_title("Product created:"));
    Ok(())
}
