//! Table formatting utilities for CLI output.

use catalog_core::Product;

/// Truncates a string to at most `max_len` characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use catalog_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Módulo ABS trasero", 9), "Módulo...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// Comma-separated model names, or `default` when there are none.
pub fn format_models(product: &Product, default: &str) -> String {
    if product.compatible_models.is_empty() {
        return default.to_string();
    }
    product
        .compatible_models
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

const TABLE_WIDTH: usize = 96;

/// Render products as a fixed-width table, one row per product in order.
pub fn render_product_table(products: &[Product]) -> String {
    let mut out = format!(
        "{:<6} {:<28} {:<12} {:>10} {:>7}  {}\n",
        "ID", "Name", "Category", "Price", "Stock", "Models"
    );
    out.push_str(&"-".repeat(TABLE_WIDTH));
    out.push('\n');

    for product in products {
        out.push_str(&format!(
            "{:<6} {:<28} {:<12} {:>10} {:>7}  {}\n",
            truncate_string(&product.id, 6),
            truncate_string(&product.name, 28),
            product.category.as_str(),
            format_price(product.price),
            product.stock,
            truncate_string(&format_models(product, "--"), 26),
        ));
    }
    out
}
