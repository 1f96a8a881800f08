use crate::dom::{Document, Element, Node};

/// Strips insignificant whitespace from a document.
///
/// Text nodes are trimmed and whitespace-only text nodes are dropped, at every
/// depth. The child lists are rebuilt rather than edited in place.
pub fn normalize(document: Document) -> Document {
    Document { children: normalize_children(document.children) }
}

fn normalize_children(children: Vec<Node>) -> Vec<Node> {
    children.into_iter().filter_map(normalize_node).collect()
}

fn normalize_node(node: Node) -> Option<Node> {
    match node {
        Node::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else if trimmed.len() == text.len() {
                Some(Node::Text(text))
            } else {
                Some(Node::text(trimmed))
            }
        }
        Node::Element(Element { tag, attrs, children }) => Some(Node::Element(Element {
            tag,
            attrs,
            children: normalize_children(children),
        })),
        Node::Other => Some(Node::Other),
    }
}
