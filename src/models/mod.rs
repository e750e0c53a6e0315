//! Data models for the product list
//!
//! This module contains the product record and the built-in catalog.

pub mod product;

// Re-export commonly used types
pub use product::{catalog, products_from_json, Product, CATALOG};
