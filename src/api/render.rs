//! Rendering exports

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, to_js_error};
use crate::dom::WebDocument;
use crate::errors::Result;
use crate::models::{catalog, products_from_json, Product};
use crate::renderers::{render_products, RenderConfig};
use crate::utils::RenderTimer;
use crate::wasm_info;

fn render_into_page(config: &RenderConfig, products: &[Product]) -> Result<()> {
    let timer = RenderTimer::start("render_products");
    let mut document = WebDocument::from_window()?;
    render_products(&mut document, config, products)?;
    timer.finish();
    Ok(())
}

/// Render the built-in catalog into `containerId` (default `product-list`)
#[wasm_bindgen(js_name = renderProductList)]
pub fn render_product_list(container_id: Option<String>) -> std::result::Result<(), JsValue> {
    let config = match container_id {
        Some(id) => RenderConfig::with_container(id),
        None => RenderConfig::default(),
    };
    wasm_info!("renderProductList called: container=#{}", config.container_id);

    render_into_page(&config, catalog()).map_err(to_js_error)
}

/// Render an array of `{name, price}` objects
#[wasm_bindgen(js_name = renderProducts)]
pub fn render_products_js(container_id: &str, products_js: JsValue) -> std::result::Result<(), JsValue> {
    wasm_info!("renderProducts called: container=#{}", container_id);

    let products: Vec<Product> = deserialize(products_js, "products").map_err(to_js_error)?;
    render_into_page(&RenderConfig::with_container(container_id), &products).map_err(to_js_error)
}

/// Render a JSON array string of `{name, price}` objects
#[wasm_bindgen(js_name = renderProductsJson)]
pub fn render_products_json(container_id: &str, json: &str) -> std::result::Result<(), JsValue> {
    wasm_info!("renderProductsJson called: container=#{}", container_id);

    let products = products_from_json(json).map_err(to_js_error)?;
    render_into_page(&RenderConfig::with_container(container_id), &products).map_err(to_js_error)
}

/// Render products with a configuration object; omitted fields keep defaults
#[wasm_bindgen(js_name = renderProductsWithConfig)]
pub fn render_products_with_config(
    products_js: JsValue,
    config_js: JsValue,
) -> std::result::Result<(), JsValue> {
    let config: RenderConfig = if config_js.is_undefined() || config_js.is_null() {
        RenderConfig::default()
    } else {
        deserialize(config_js, "config").map_err(to_js_error)?
    };
    wasm_info!("renderProductsWithConfig called: container=#{}", config.container_id);

    let products: Vec<Product> = deserialize(products_js, "products").map_err(to_js_error)?;
    render_into_page(&config, &products).map_err(to_js_error)
}

/// Built-in catalog as an array of `{name, price}` objects
#[wasm_bindgen(js_name = getCatalog)]
pub fn get_catalog() -> std::result::Result<JsValue, JsValue> {
    serialize(&catalog(), "Serialization error")
}
