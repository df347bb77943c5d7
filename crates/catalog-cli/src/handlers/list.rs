//! List command handler.
//!
//! Refreshes the cache, then prints the filtered and sorted view.

use anyhow::Result;
use catalog_core::{Operation, Product, SortDirection, SortField, ViewQuery, project};

use crate::bootstrap::CliContext;
use crate::handlers::failure;
use crate::presentation::render_product_table;

#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    pub search: Option<String>,
    pub sort: SortField,
    pub descending: bool,
}

impl ListArgs {
    fn query(&self) -> ViewQuery {
        let direction = if self.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        ViewQuery::new()
            .with_term(self.search.clone().unwrap_or_default())
            .with_sort(self.sort, direction)
    }
}

/// Execute the list command.
///
/// # Errors
///
/// Returns [`CliError::Operation`](crate::CliError::Operation) when the
/// collection cannot be fetched.
pub async fn execute(ctx: &CliContext, args: &ListArgs) -> Result<()> {
    if !ctx.store().list().await {
        return Err(failure(ctx, Operation::List));
    }

    let view = visible_products(ctx, args);
    if view.is_empty() {
        if args.search.is_some() {
            println!("No products match the search.");
        } else {
            println!("The catalog is empty.");
            println!("Use 'catalog add' to create the first product.");
        }
        return Ok(());
    }

    println!("Found {} product(s):\n", view.len());
    print!("{}", render_product_table(&view));
    Ok(())
}

/// Cached products as the table shows them.
pub fn visible_products(ctx: &CliContext, args: &ListArgs) -> Vec<Product> {
    project(&ctx.store().products(), &args.query())
}
