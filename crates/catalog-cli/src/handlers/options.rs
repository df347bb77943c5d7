//! Options command handler: the accepted enumeration values.

use std::fmt::Write as _;

use catalog_core::{CompatibleModel, ProductCategory};

pub fn format_options() -> String {
    let mut out = String::from("Categories:\n");
    for category in ProductCategory::ALL {
        let _ = writeln!(out, "  {category}");
    }
    out.push_str("\nCompatible models:\n");
    for model in CompatibleModel::ALL {
        let _ = writeln!(out, "  {model}");
    }
    out
}

pub fn execute() {
    print!("{}", format_options());
}
