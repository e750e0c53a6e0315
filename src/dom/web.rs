//! Browser document backed by `web_sys`

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::DomHost;
use crate::errors::{RenderError, Result};

/// Live document of the page hosting the WASM module
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current global window
    pub fn from_window() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| RenderError::Dom("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| RenderError::Dom("window has no document".to_string()))?;
        Ok(Self::new(document))
    }
}

fn js_error(context: &str, err: JsValue) -> RenderError {
    let detail = err.as_string().unwrap_or_else(|| format!("{:?}", err));
    RenderError::Dom(format!("{}: {}", context, detail))
}

impl DomHost for WebDocument {
    type Element = Element;

    fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create_element(&mut self, tag: &str) -> Result<Element> {
        self.document
            .create_element(tag)
            .map_err(|e| js_error("createElement", e))
    }

    fn set_class_name(&mut self, element: &Element, class_name: &str) {
        element.set_class_name(class_name);
    }

    fn set_text_content(&mut self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn append_text(&mut self, parent: &Element, text: &str) -> Result<()> {
        let node = self.document.create_text_node(text);
        parent
            .append_child(&node)
            .map(|_| ())
            .map_err(|e| js_error("appendChild", e))
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<()> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| js_error("appendChild", e))
    }

    // Children are collected in a fragment first; the container sees a
    // single insertion.
    fn append_children(&mut self, parent: &Element, children: &[Element]) -> Result<()> {
        let fragment = self.document.create_document_fragment();
        for child in children {
            fragment
                .append_child(child)
                .map_err(|e| js_error("appendChild (fragment)", e))?;
        }
        parent
            .append_child(&fragment)
            .map(|_| ())
            .map_err(|e| js_error("appendChild", e))
    }
}
