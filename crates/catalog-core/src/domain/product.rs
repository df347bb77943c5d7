//! Product domain types.
//!
//! These types represent catalog items as the rest of the workspace sees them.
//! Every `Product` held by the store has passed through [`super::normalize`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Enumerations
// ─────────────────────────────────────────────────────────────────────────────

/// Closed set of product categories.
///
/// Serialized with the wire values used by the remote collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductCategory {
    /// Electronic parts. Also the fallback for unknown categories.
    #[default]
    #[serde(rename = "Electrónica")]
    Electronics,
    #[serde(rename = "Motor")]
    Motor,
    #[serde(rename = "Accesorios")]
    Accessories,
}

impl ProductCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 3] = [Self::Electronics, Self::Motor, Self::Accessories];

    /// Wire value of this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electrónica",
            Self::Motor => "Motor",
            Self::Accessories => "Accesorios",
        }
    }

    /// Look up a category by its exact wire value.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    const fn key(self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Motor => "motor",
            Self::Accessories => "accessories",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown enumeration value from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl FromStr for ProductCategory {
    type Err = UnknownVariant;

    /// Strict parse for user input: accepts the wire value or the English key,
    /// case-insensitively. Untrusted payloads go through normalization instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == wanted || c.key() == wanted)
            .ok_or_else(|| UnknownVariant {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// Closed set of vehicle models a part can fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatibleModel {
    #[serde(rename = "Golf I")]
    Golf1,
    #[serde(rename = "Golf II")]
    Golf2,
    #[serde(rename = "Golf III")]
    Golf3,
    #[serde(rename = "Golf IV")]
    Golf4,
    #[serde(rename = "Golf V")]
    Golf5,
    #[serde(rename = "Golf VI")]
    Golf6,
    #[serde(rename = "Golf VII")]
    Golf7,
    #[serde(rename = "Golf VIII")]
    Golf8,
    #[serde(rename = "Passat B5")]
    PassatB5,
    #[serde(rename = "Passat B6")]
    PassatB6,
    #[serde(rename = "Passat B7")]
    PassatB7,
    #[serde(rename = "Passat B8")]
    PassatB8,
    #[serde(rename = "Tiguan I")]
    Tiguan1,
    #[serde(rename = "Tiguan II")]
    Tiguan2,
    #[serde(rename = "Caddy 4")]
    Caddy4,
    #[serde(rename = "Caddy 5")]
    Caddy5,
}

impl CompatibleModel {
    /// Every model, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Golf1,
        Self::Golf2,
        Self::Golf3,
        Self::Golf4,
        Self::Golf5,
        Self::Golf6,
        Self::Golf7,
        Self::Golf8,
        Self::PassatB5,
        Self::PassatB6,
        Self::PassatB7,
        Self::PassatB8,
        Self::Tiguan1,
        Self::Tiguan2,
        Self::Caddy4,
        Self::Caddy5,
    ];

    /// Wire value of this model.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Golf1 => "Golf I",
            Self::Golf2 => "Golf II",
            Self::Golf3 => "Golf III",
            Self::Golf4 => "Golf IV",
            Self::Golf5 => "Golf V",
            Self::Golf6 => "Golf VI",
            Self::Golf7 => "Golf VII",
            Self::Golf8 => "Golf VIII",
            Self::PassatB5 => "Passat B5",
            Self::PassatB6 => "Passat B6",
            Self::PassatB7 => "Passat B7",
            Self::PassatB8 => "Passat B8",
            Self::Tiguan1 => "Tiguan I",
            Self::Tiguan2 => "Tiguan II",
            Self::Caddy4 => "Caddy 4",
            Self::Caddy5 => "Caddy 5",
        }
    }

    /// Look up a model by its exact wire value.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

impl fmt::Display for CompatibleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompatibleModel {
    type Err = UnknownVariant;

    /// Case-insensitive match on the wire value, so `golf iv` parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().to_lowercase() == wanted)
            .ok_or_else(|| UnknownVariant {
                kind: "compatible model",
                value: s.to_string(),
            })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// A catalog item as cached by the store.
///
/// `id` is assigned by the remote service and never generated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub price: f64,
    pub stock: u64,
    pub description: String,
    pub compatible_models: Vec<CompatibleModel>,
}

impl Product {
    /// Copy every field except `id` into a draft.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category,
            price: self.price,
            stock: self.stock,
            description: self.description.clone(),
            compatible_models: self.compatible_models.clone(),
        }
    }
}

/// Payload for creating a product. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub category: ProductCategory,
    pub price: f64,
    pub stock: u64,
    pub description: String,
    pub compatible_models: Vec<CompatibleModel>,
}

impl ProductDraft {
    /// Attach a server-assigned id, producing a full record.
    pub fn with_id(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            category: self.category,
            price: self.price,
            stock: self.stock,
            description: self.description,
            compatible_models: self.compatible_models,
        }
    }
}
