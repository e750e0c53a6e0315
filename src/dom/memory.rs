//! In-memory document tree
//!
//! Arena-backed stand-in for a browser document. Nodes are never freed;
//! a [`NodeId`] stays valid for the lifetime of the document.

use super::DomHost;
use crate::errors::{RenderError, Result};

/// Index of a node in a [`MemoryDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        id: Option<String>,
        class_name: String,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    body: NodeId,
}

impl MemoryDocument {
    /// Empty document containing only a `<body>` element
    pub fn new() -> Self {
        let body = Node {
            parent: None,
            children: Vec::new(),
            kind: NodeKind::Element {
                tag: "body".to_string(),
                id: None,
                class_name: String::new(),
            },
        };
        Self {
            nodes: vec![body],
            body: NodeId(0),
        }
    }

    /// Document with an empty `<ul>` carrying the given id
    pub fn with_container(id: &str) -> Self {
        let mut doc = Self::new();
        doc.add_element("ul", id);
        doc
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create an element with an id and attach it to the body
    pub fn add_element(&mut self, tag: &str, id: &str) -> NodeId {
        let node = self.push_node(NodeKind::Element {
            tag: tag.to_string(),
            id: Some(id.to_string()),
            class_name: String::new(),
        });
        self.nodes[node.0].parent = Some(self.body);
        self.nodes[self.body.0].children.push(node);
        node
    }

    fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            kind,
        });
        id
    }

    fn is_element(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.0].kind, NodeKind::Element { .. })
    }

    /// Total number of nodes ever created, attached or not
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// All child nodes, text nodes included
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Child elements only, in document order
    pub fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(|child| self.is_element(*child))
            .collect()
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn class_name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { class_name, .. } => Some(class_name),
            NodeKind::Text(_) => None,
        }
    }

    /// First direct child element whose class list contains `class`
    pub fn find_child_by_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.element_children(node).into_iter().find(|child| {
            self.class_name(*child)
                .is_some_and(|names| names.split_whitespace().any(|name| name == class))
        })
    }

    /// Concatenated text of the node and all its descendants
    pub fn text_content(&self, node: NodeId) -> String {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => text.clone(),
            NodeKind::Element { .. } => {
                let mut out = String::new();
                for child in &self.nodes[node.0].children {
                    out.push_str(&self.text_content(*child));
                }
                out
            }
        }
    }

    /// Serialize the node and its subtree as HTML
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => out.push_str(&escape_text(text)),
            NodeKind::Element {
                tag,
                id,
                class_name,
            } => {
                out.push('<');
                out.push_str(tag);
                if let Some(id) = id {
                    out.push_str(&format!(" id=\"{}\"", escape_attr(id)));
                }
                if !class_name.is_empty() {
                    out.push_str(&format!(" class=\"{}\"", escape_attr(class_name)));
                }
                out.push('>');
                for child in &self.nodes[node.0].children {
                    self.write_html(*child, out);
                }
                out.push_str(&format!("</{}>", tag));
            }
        }
    }

    fn find_by_id(&self, node: NodeId, wanted: &str) -> Option<NodeId> {
        if let NodeKind::Element { id: Some(id), .. } = &self.nodes[node.0].kind {
            if id == wanted {
                return Some(node);
            }
        }
        self.nodes[node.0]
            .children
            .iter()
            .find_map(|child| self.find_by_id(*child, wanted))
    }

    fn check_attach(&self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.is_element(parent) {
            return Err(RenderError::Dom(
                "appendChild target cannot have children".to_string(),
            ));
        }
        if child == self.body {
            return Err(RenderError::Dom("invalid appendChild node".to_string()));
        }

        // parent must not be inside child's subtree
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(RenderError::Dom(
                    "appendChild would create a cycle".to_string(),
                ));
            }
            cursor = self.parent(node);
        }
        Ok(())
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_attach(parent, child)?;
        if let Some(old_parent) = self.parent(child) {
            self.nodes[old_parent.0].children.retain(|id| *id != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

impl DomHost for MemoryDocument {
    type Element = NodeId;

    fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_by_id(self.body, id)
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        if tag.is_empty() {
            return Err(RenderError::Dom("createElement: empty tag name".to_string()));
        }
        Ok(self.push_node(NodeKind::Element {
            tag: tag.to_string(),
            id: None,
            class_name: String::new(),
        }))
    }

    fn set_class_name(&mut self, element: &NodeId, class: &str) {
        if let NodeKind::Element { class_name, .. } = &mut self.nodes[element.0].kind {
            *class_name = class.to_string();
        }
    }

    fn set_text_content(&mut self, element: &NodeId, text: &str) {
        if !self.is_element(*element) {
            return;
        }
        for child in std::mem::take(&mut self.nodes[element.0].children) {
            self.nodes[child.0].parent = None;
        }
        if !text.is_empty() {
            let node = self.push_node(NodeKind::Text(text.to_string()));
            self.nodes[node.0].parent = Some(*element);
            self.nodes[element.0].children.push(node);
        }
    }

    fn append_text(&mut self, parent: &NodeId, text: &str) -> Result<()> {
        let node = self.push_node(NodeKind::Text(text.to_string()));
        self.attach(*parent, node)
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<()> {
        self.attach(*parent, *child)
    }

    fn append_children(&mut self, parent: &NodeId, children: &[NodeId]) -> Result<()> {
        for child in children {
            self.check_attach(*parent, *child)?;
        }
        for child in children {
            self.attach(*parent, *child)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let mut doc = MemoryDocument::new();
        let list = doc.add_element("ul", "product-list");

        assert_eq!(doc.get_element_by_id("product-list"), Some(list));
        assert_eq!(doc.get_element_by_id("missing"), None);
    }

    #[test]
    fn test_add_element_attaches_to_body() {
        let mut doc = MemoryDocument::new();
        let list = doc.add_element("ul", "product-list");

        assert_eq!(doc.parent(list), Some(doc.body()));
        assert_eq!(doc.children(doc.body()), &[list]);
        assert_eq!(doc.tag_name(doc.body()), Some("body"));
    }

    #[test]
    fn test_append_children_is_all_or_nothing() {
        let mut doc = MemoryDocument::with_container("product-list");
        let list = doc.get_element_by_id("product-list").unwrap();
        let first = doc.create_element("li").unwrap();
        let body = doc.body();

        // body cannot be moved, so the whole batch is rejected
        let result = doc.append_children(&list, &[first, body]);

        assert!(matches!(result, Err(RenderError::Dom(_))));
        assert!(doc.children(list).is_empty());
        assert_eq!(doc.parent(first), None);
    }

    #[test]
    fn test_append_children_keeps_order() {
        let mut doc = MemoryDocument::with_container("product-list");
        let list = doc.get_element_by_id("product-list").unwrap();
        let a = doc.create_element("li").unwrap();
        let b = doc.create_element("li").unwrap();

        doc.append_children(&list, &[a, b]).unwrap();

        assert_eq!(doc.children(list), &[a, b]);
    }

    #[test]
    fn test_detached_element_not_found_by_id() {
        let mut doc = MemoryDocument::new();
        let list = doc.add_element("ul", "product-list");
        let other = doc.create_element("div").unwrap();
        doc.append_child(&other, &list).unwrap();

        // moved under a detached subtree, so no longer reachable from body
        assert_eq!(doc.get_element_by_id("product-list"), None);
    }

    #[test]
    fn test_set_text_content_replaces_children() {
        let mut doc = MemoryDocument::new();
        let span = doc.create_element("span").unwrap();
        doc.append_text(&span, "old").unwrap();
        doc.set_text_content(&span, "new");

        assert_eq!(doc.children(span).len(), 1);
        assert_eq!(doc.text_content(span), "new");
    }

    #[test]
    fn test_append_child_rejects_cycle() {
        let mut doc = MemoryDocument::new();
        let outer = doc.create_element("div").unwrap();
        let inner = doc.create_element("div").unwrap();
        doc.append_child(&outer, &inner).unwrap();

        assert!(doc.append_child(&inner, &outer).is_err());
        assert!(doc.append_child(&outer, &outer).is_err());
    }

    #[test]
    fn test_append_child_moves_node() {
        let mut doc = MemoryDocument::new();
        let a = doc.create_element("div").unwrap();
        let b = doc.create_element("div").unwrap();
        let child = doc.create_element("span").unwrap();

        doc.append_child(&a, &child).unwrap();
        doc.append_child(&b, &child).unwrap();

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[child]);
        assert_eq!(doc.parent(child), Some(b));
    }

    #[test]
    fn test_outer_html_escapes_text_and_attributes() {
        let mut doc = MemoryDocument::new();
        let span = doc.create_element("span").unwrap();
        doc.set_class_name(&span, "a\"b");
        doc.set_text_content(&span, "<b>&</b>");

        assert_eq!(
            doc.outer_html(span),
            "<span class=\"a&quot;b\">&lt;b&gt;&amp;&lt;/b&gt;</span>"
        );
    }

    #[test]
    fn test_text_node_cannot_have_children() {
        let mut doc = MemoryDocument::new();
        let span = doc.create_element("span").unwrap();
        doc.set_text_content(&span, "x");
        let text = doc.children(span)[0];
        let child = doc.create_element("b").unwrap();

        assert!(matches!(
            doc.append_child(&text, &child),
            Err(RenderError::Dom(_))
        ));
    }
}
