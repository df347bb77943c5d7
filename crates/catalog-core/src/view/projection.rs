//! Filtered, sorted views over a store snapshot.
//!
//! [`project`] is pure: it never mutates its input and keeps no state, so
//! presentation code can re-run it on every store change.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::collation::collate;
use crate::domain::{Product, UnknownVariant};

/// Field a view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    Id,
    #[default]
    Name,
    Category,
    Price,
    Stock,
    Description,
}

impl SortField {
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Name,
        Self::Category,
        Self::Price,
        Self::Stock,
        Self::Description,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Category => "category",
            Self::Price => "price",
            Self::Stock => "stock",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| UnknownVariant {
                kind: "sort field",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Search term plus ordering for a view.
///
/// The default query matches everything and sorts by name, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewQuery {
    pub term: String,
    pub sort_field: SortField,
    pub direction: SortDirection,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.direction = direction;
        self
    }

    /// Column-header behavior: re-selecting the current field flips the
    /// direction, selecting another field sorts by it ascending.
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort_field == field {
            self.direction = self.direction.toggled();
        } else {
            self.sort_field = field;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Filter and sort `products` according to `query`.
///
/// A product matches when any of name, category, description, id, price or
/// stock contains the term, ignoring case. The sort is stable: products
/// with equal keys keep their input order in both directions.
pub fn project(products: &[Product], query: &ViewQuery) -> Vec<Product> {
    let needle = query.term.to_lowercase();
    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| matches(p, &needle))
        .cloned()
        .collect();
    view.sort_by(|a, b| query.direction.apply(compare(a, b, query.sort_field)));
    view
}

/// Whether `product` matches an already-lowercased search term.
fn matches(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        product.name.to_lowercase(),
        product.category.as_str().to_lowercase(),
        product.description.to_lowercase(),
        product.id.to_lowercase(),
        product.price.to_string(),
        product.stock.to_string(),
    ]
    .iter()
    .any(|field| field.contains(needle))
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Id => collate(&a.id, &b.id),
        SortField::Name => collate(&a.name, &b.name),
        SortField::Category => collate(a.category.as_str(), b.category.as_str()),
        SortField::Description => collate(&a.description, &b.description),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Stock => a.stock.cmp(&b.stock),
    }
}
