//! Product List WASM API
//!
//! JavaScript-facing entry points. Each export resolves the live page
//! document, renders, and converts failures into thrown `Error` objects.
//!
//! # Module Structure
//!
//! - `helpers`: logging macros, (de)serialization and error conversion
//! - `render`: rendering exports

pub mod helpers;
pub mod render;

pub use render::{
    get_catalog, render_product_list, render_products_js, render_products_json,
    render_products_with_config,
};
