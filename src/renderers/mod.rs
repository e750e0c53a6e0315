//! Renderers
//!
//! Builds DOM nodes for product records inside a host document.

pub mod config;
pub mod product_list;

pub use config::RenderConfig;
pub use product_list::{render_catalog, render_products};
