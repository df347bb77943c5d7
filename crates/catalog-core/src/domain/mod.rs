//! Domain types for the product catalog.
//!
//! These types are pure data with no infrastructure dependencies.

mod normalize;
mod product;

pub use normalize::{RawProduct, normalize};
pub use product::{CompatibleModel, Product, ProductCategory, ProductDraft, UnknownVariant};
