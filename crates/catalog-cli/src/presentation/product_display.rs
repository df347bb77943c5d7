//! Product summary display utilities for CLI output.

use std::fmt::Write as _;

use catalog_core::Product;

use super::tables::{format_models, format_price};

/// Options for displaying a product summary.
#[derive(Debug, Clone, Default)]
pub struct ProductSummaryOpts<'a> {
    /// Optional title printed before the details.
    pub title: Option<&'a str>,
    pub show_description: bool,
}

impl<'a> ProductSummaryOpts<'a> {
    /// Full details under a title.
    pub const fn with_title(title: &'a str) -> Self {
        Self {
            title: Some(title),
            show_description: true,
        }
    }

    /// Short form shown before asking to delete.
    pub const fn for_removal() -> Self {
        Self {
            title: Some("Product to remove:"),
            show_description: false,
        }
    }
}

pub fn format_product_summary(product: &Product, opts: &ProductSummaryOpts<'_>) -> String {
    let mut out = String::new();
    if let Some(title) = opts.title {
        let _ = writeln!(out, "{title}");
    }

    let _ = writeln!(out, "  ID: {}", product.id);
    let _ = writeln!(out, "  Name: {}", product.name);
    let _ = writeln!(out, "  Category: {}", product.category);
    let _ = writeln!(out, "  Price: {}", format_price(product.price));
    let _ = writeln!(out, "  Stock: {}", product.stock);
    let _ = writeln!(out, "  Models: {}", format_models(product, "none"));

    if opts.show_description && !product.description.is_empty() {
        let _ = writeln!(out, "  Description: {}", product.description);
    }
    out
}

/// Display a product summary to stdout.
pub fn display_product_summary(product: &Product, opts: &ProductSummaryOpts<'_>) {
    print!("{}", format_product_summary(product, opts));
}
