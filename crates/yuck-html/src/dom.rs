//! An owned HTML tree, detached from the parser that produced it.

use ecow::EcoString;

/// How deeply elements may nest before their subtrees are dropped.
pub const MAX_DEPTH: usize = 256;

/// A parsed HTML document.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Document {
    /// The top-level nodes, usually a doctype and the `<html>` element.
    pub children: Vec<Node>,
}

impl Document {
    /// Create a document from its top-level nodes.
    pub fn new(children: impl IntoIterator<Item = Node>) -> Self {
        Self { children: children.into_iter().collect() }
    }
}

/// A node in the tree.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    /// An element with a tag, attributes and children.
    Element(Element),
    /// A run of character data.
    Text(EcoString),
    /// Comments, doctypes, processing instructions.
    Other,
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<EcoString>) -> Self {
        Self::Text(text.into())
    }

    /// The node as an element, if it is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An HTML element.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Element {
    /// The lowercase tag name.
    pub tag: EcoString,
    /// Attributes in source order. Keys may repeat.
    pub attrs: Vec<(EcoString, EcoString)>,
    /// Child nodes in source order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create a new element without attributes or children.
    pub fn new(tag: impl Into<EcoString>) -> Self {
        Self { tag: tag.into(), attrs: vec![], children: vec![] }
    }

    /// Attach an attribute.
    pub fn with_attr(
        mut self,
        key: impl Into<EcoString>,
        value: impl Into<EcoString>,
    ) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Attach a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// The value of the first attribute with this key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// The first direct child element with the given tag.
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find(|element| element.tag == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_returns_first_match() {
        let element = Element::new("box").with_attr("a", "1").with_attr("a", "2");
        assert_eq!(element.attr("a"), Some("1"));
        assert_eq!(element.attr("b"), None);
    }

    #[test]
    fn test_child_skips_text() {
        let element = Element::new("html")
            .with_child(Node::text("head"))
            .with_child(Element::new("head"))
            .with_child(Element::new("body").with_attr("id", "first"))
            .with_child(Element::new("body"));
        assert_eq!(element.child("body").and_then(|body| body.attr("id")), Some("first"));
        assert!(element.child("footer").is_none());
    }
}
