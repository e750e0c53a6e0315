//! Host document abstraction
//!
//! The renderer only needs a handful of document operations. They are
//! expressed as the [`DomHost`] trait so the same rendering pass runs against
//! the browser document ([`WebDocument`]) and an in-memory tree
//! ([`MemoryDocument`]).

pub mod memory;
pub mod web;

pub use memory::{MemoryDocument, NodeId};
pub use web::WebDocument;

use crate::errors::Result;

/// Document operations used by the renderers
pub trait DomHost {
    /// Handle to an element owned by the document
    type Element;

    /// Look up an element by its `id` attribute
    fn get_element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Create a detached element with the given tag name
    fn create_element(&mut self, tag: &str) -> Result<Self::Element>;

    fn set_class_name(&mut self, element: &Self::Element, class_name: &str);

    /// Replace the element's children with a single text node.
    /// The text is never parsed as markup.
    fn set_text_content(&mut self, element: &Self::Element, text: &str);

    /// Append a plain text node as the last child of `parent`
    fn append_text(&mut self, parent: &Self::Element, text: &str) -> Result<()>;

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element) -> Result<()>;

    /// Append `children` to `parent` in order.
    ///
    /// Hosts that can attach a batch in one step override this so a failure
    /// leaves `parent` unchanged. The default appends one at a time.
    fn append_children(&mut self, parent: &Self::Element, children: &[Self::Element]) -> Result<()> {
        for child in children {
            self.append_child(parent, child)?;
        }
        Ok(())
    }
}
