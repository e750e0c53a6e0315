//! Product list rendering
//!
//! One pass over the product records: each record becomes an item element
//! holding a name field and a price field, appended to the container in
//! input order. Nothing is cleared first, so rendering twice appends twice.

use crate::dom::DomHost;
use crate::errors::{RenderError, Result};
use crate::models::{catalog, Product};
use crate::renderers::config::RenderConfig;

/// Append one item per product to the configured container.
///
/// Fails with [`RenderError::ContainerNotFound`] before touching the
/// document when the container id does not resolve.
pub fn render_products<H: DomHost>(
    host: &mut H,
    config: &RenderConfig,
    products: &[Product],
) -> Result<()> {
    let container = host.get_element_by_id(&config.container_id).ok_or_else(|| {
        log::warn!("container #{} not found", config.container_id);
        RenderError::ContainerNotFound(config.container_id.clone())
    })?;

    log::debug!(
        "rendering {} products into #{}",
        products.len(),
        config.container_id
    );

    // Items are built detached and attached as one batch, so a host
    // failure at any point leaves the container untouched.
    let items = products
        .iter()
        .map(|product| build_item(host, config, product))
        .collect::<Result<Vec<_>>>()?;

    host.append_children(&container, &items)
}

/// Render the built-in catalog
pub fn render_catalog<H: DomHost>(host: &mut H, config: &RenderConfig) -> Result<()> {
    render_products(host, config, catalog())
}

fn build_item<H: DomHost>(host: &mut H, config: &RenderConfig, product: &Product) -> Result<H::Element> {
    let item = host.create_element(&config.item_tag)?;
    host.set_class_name(&item, &config.item_class);

    let name = build_field(host, &config.name_class, &product.name)?;
    host.append_child(&item, &name)?;

    if let Some(separator) = &config.separator {
        host.append_text(&item, separator)?;
    }

    let price = build_field(host, &config.price_class, &product.price)?;
    host.append_child(&item, &price)?;

    Ok(item)
}

fn build_field<H: DomHost>(host: &mut H, class_name: &str, text: &str) -> Result<H::Element> {
    let field = host.create_element("span")?;
    host.set_class_name(&field, class_name);
    host.set_text_content(&field, text);
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;

    #[test]
    fn test_item_markup() {
        let mut doc = MemoryDocument::with_container("product-list");
        let products = [Product::new("Laptop", "$799")];
        render_products(&mut doc, &RenderConfig::default(), &products).unwrap();

        let list = doc.get_element_by_id("product-list").unwrap();
        assert_eq!(
            doc.outer_html(list),
            "<ul id=\"product-list\"><li class=\"product-item\">\
             <span class=\"product-name\">Laptop</span> - \
             <span class=\"product-price\">$799</span></li></ul>"
        );
    }

    #[test]
    fn test_without_separator() {
        let mut doc = MemoryDocument::with_container("product-list");
        let config = RenderConfig {
            separator: None,
            ..RenderConfig::default()
        };
        render_products(&mut doc, &config, &[Product::new("Laptop", "$799")]).unwrap();

        let list = doc.get_element_by_id("product-list").unwrap();
        let item = doc.children(list)[0];
        assert_eq!(doc.children(item).len(), 2);
        assert_eq!(doc.text_content(item), "Laptop$799");
    }

    #[test]
    fn test_missing_container_creates_nothing() {
        let mut doc = MemoryDocument::with_container("product-list");
        let before = doc.node_count();
        let err = render_catalog(&mut doc, &RenderConfig::with_container("nope")).unwrap_err();

        assert_eq!(err, RenderError::ContainerNotFound("nope".to_string()));
        assert_eq!(doc.node_count(), before);
    }

    #[test]
    fn test_host_failure_appends_nothing() {
        let mut doc = MemoryDocument::with_container("product-list");
        let config = RenderConfig {
            item_tag: String::new(),
            ..RenderConfig::default()
        };
        let err = render_catalog(&mut doc, &config).unwrap_err();

        assert!(matches!(err, RenderError::Dom(_)));
        let list = doc.get_element_by_id("product-list").unwrap();
        assert!(doc.children(list).is_empty());
    }
}
