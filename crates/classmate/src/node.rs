//! Rendered output.
//!
//! Rendering a styled component yields a [`Node`] tree that a host can
//! turn into real DOM, a string, or anything else. Nodes serialize with
//! `serde` so they can be inspected and snapshotted.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::props::PropValue;
use crate::style::StyleMap;

/// A rendered node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An intrinsic element with its final class, style and attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: StyleMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, PropValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: String::new(),
            style: StyleMap::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&PropValue> {
        self.attributes.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Iterates the individual classes of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class.split_whitespace()
    }

    /// Whether every class in `classes` (space-separated) is present,
    /// regardless of order.
    pub fn has_classes(&self, classes: &str) -> bool {
        classes
            .split_whitespace()
            .all(|wanted| self.classes().any(|class| class == wanted))
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_classes_ignores_order() {
        let mut element = Element::new("div");
        element.class = "p-4 rounded-md bg-blue-100".to_string();
        assert!(element.has_classes("bg-blue-100 p-4"));
        assert!(!element.has_classes("p-4 mt-2"));
    }

    #[test]
    fn test_text_content_walks_children() {
        let mut inner = Element::new("span");
        inner.children.push(Node::text("world"));
        let mut outer = Element::new("p");
        outer.children = vec![Node::text("hello "), Node::from(inner)];
        assert_eq!(outer.text_content(), "hello world");
    }

    #[test]
    fn test_serializes_without_empty_fields() {
        let element = Element::new("br");
        let json = serde_json::to_value(Node::from(element)).unwrap();
        assert_eq!(json, serde_json::json!({ "element": { "tag": "br" } }));
    }
}
