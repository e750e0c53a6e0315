//! Product records and the built-in catalog

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::errors::{RenderError, Result};

/// Immutable name/price pair.
///
/// `price` is display text already carrying its currency symbol; it is
/// never parsed as a number.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: Cow<'static, str>,
    pub price: Cow<'static, str>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            price: Cow::Owned(price.into()),
        }
    }

    /// Product borrowing static text, usable in `const` items
    pub const fn from_static(name: &'static str, price: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            price: Cow::Borrowed(price),
        }
    }
}

/// Products shown on the page, in display order
pub const CATALOG: &[Product] = &[
    Product::from_static("Laptop", "$799"),
    Product::from_static("Smartphone", "$499"),
    Product::from_static("Headphones", "$99"),
    Product::from_static("Keyboard", "$49"),
];

pub fn catalog() -> &'static [Product] {
    CATALOG
}

/// Parse a JSON array of `{"name": ..., "price": ...}` objects
pub fn products_from_json(json: &str) -> Result<Vec<Product>> {
    serde_json::from_str(json).map_err(|e| RenderError::InvalidInput(format!("products: {}", e)))
}
