//! Subcommands of the `catalog` binary.

use catalog_core::{CompatibleModel, ProductCategory, SortField};
use clap::Subcommand;

/// Available catalog commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List products, optionally filtered and sorted
    List {
        /// Case-insensitive term matched against every field
        #[arg(short, long)]
        search: Option<String>,
        /// Sort by: id, name, category, price, stock, description
        #[arg(long, default_value_t = SortField::Name)]
        sort: SortField,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Show one product
    Show {
        /// Product ID
        id: String,
    },

    /// Create a product
    Add {
        #[arg(short, long)]
        name: String,
        /// One of: Electrónica, Motor, Accesorios
        #[arg(short, long, default_value_t = ProductCategory::Electronics)]
        category: ProductCategory,
        #[arg(short, long)]
        price: f64,
        #[arg(short, long, default_value_t = 0)]
        stock: u64,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Compatible model, repeatable (e.g. --model "Golf VII")
        #[arg(short, long = "model")]
        models: Vec<CompatibleModel>,
    },

    /// Edit fields of an existing product
    Update {
        /// Product ID
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        category: Option<ProductCategory>,
        #[arg(short, long)]
        price: Option<f64>,
        #[arg(short, long)]
        stock: Option<u64>,
        #[arg(short, long)]
        description: Option<String>,
        /// Replace the compatible models, repeatable
        #[arg(short, long = "model")]
        models: Vec<CompatibleModel>,
        /// Remove every compatible model
        #[arg(long, conflicts_with = "models")]
        clear_models: bool,
    },

    /// Delete a product
    Remove {
        /// Product ID
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the accepted categories and compatible models
    Options,
}
