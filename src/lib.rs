//! Product List WASM Module
//!
//! Renders a list of products into a container element of the host page.
//! The rendering pass is written against the [`dom::DomHost`] trait so it
//! runs both in the browser and against an in-memory document.

pub mod api;
pub mod dom;
pub mod errors;
pub mod models;
pub mod renderers;
pub mod utils;

// Re-export commonly used types
pub use errors::RenderError;
pub use models::{catalog, Product, CATALOG};
pub use renderers::{render_catalog, render_products, RenderConfig};

use wasm_bindgen::prelude::*;

// Runs once when the module is instantiated. Rendering is left to the page,
// which calls `renderProductList` once the container is in the document.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logger();

    log::info!("Product list WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[WASM] logger already initialized: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logger() {}
