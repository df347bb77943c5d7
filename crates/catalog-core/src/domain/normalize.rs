//! Normalization of untrusted product payloads.
//!
//! [`normalize`] is a total function: it never fails, and it substitutes or
//! drops invalid fields instead of rejecting the payload.
//!
//! | Field | Invalid input becomes |
//! |-------|-----------------------|
//! | `id` | numbers are stringified, anything else is `""` |
//! | `name`, `description` | `""` |
//! | `category` | [`ProductCategory::default`] |
//! | `price` | `0.0`; negatives clamp to `0.0` |
//! | `stock` | `0`; fractions truncate |
//! | `compatibleModels` | unknown entries dropped, non-arrays become `[]` |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::product::{CompatibleModel, Product, ProductCategory};

/// A product payload as received from the remote service, not yet trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProduct(Value);

impl RawProduct {
    /// Wrap an arbitrary JSON value.
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON.
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume into the underlying JSON.
    pub fn into_value(self) -> Value {
        self.0
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl From<Value> for RawProduct {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&Product> for RawProduct {
    fn from(product: &Product) -> Self {
        let models: Vec<Value> = product
            .compatible_models
            .iter()
            .map(|m| Value::from(m.as_str()))
            .collect();

        Self(serde_json::json!({
            "id": product.id,
            "name": product.name,
            "category": product.category.as_str(),
            "price": product.price,
            "stock": product.stock,
            "description": product.description,
            "compatibleModels": models,
        }))
    }
}

/// Convert an untrusted payload into a [`Product`].
pub fn normalize(raw: &RawProduct) -> Product {
    Product {
        id: normalize_id(raw.field("id")),
        name: text(raw.field("name")),
        category: raw
            .field("category")
            .and_then(Value::as_str)
            .and_then(ProductCategory::from_wire)
            .unwrap_or_default(),
        price: normalize_price(raw.field("price")),
        stock: normalize_stock(raw.field("stock")),
        description: text(raw.field("description")),
        compatible_models: normalize_models(raw.field("compatibleModels")),
    }
}

fn normalize_id(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn text(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|n: &f64| n.is_finite())
}

fn normalize_price(value: Option<&Value>) -> f64 {
    number(value).map_or(0.0, |n| n.max(0.0))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to >= 0 and truncated on purpose
fn normalize_stock(value: Option<&Value>) -> u64 {
    if let Some(n) = value.and_then(Value::as_u64) {
        return n;
    }
    number(value).map_or(0, |n| n.max(0.0).trunc() as u64)
}

fn normalize_models(value: Option<&Value>) -> Vec<CompatibleModel> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(Value::as_str)
        .filter_map(CompatibleModel::from_wire)
        .collect()
}
