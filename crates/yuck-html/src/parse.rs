use ego_tree::NodeRef;
use scraper::Html;

use crate::diag::{Sink, warning};
use crate::dom::{Document, Element, MAX_DEPTH, Node};

/// Parses HTML text into an owned document.
///
/// Parsing follows the lenient HTML rules and never fails: implicit `html`,
/// `head` and `body` elements are inserted and broken markup is recovered.
pub fn parse(input: &str, sink: &mut Sink) -> Document {
    let html = Html::parse_document(input);
    let mut converter = Converter { sink, truncated: false };
    Document::new(converter.children(html.tree.root(), 0))
}

/// Copies the parser's arena tree into owned nodes.
struct Converter<'a> {
    sink: &'a mut Sink,
    /// Whether a subtree was dropped for being nested too deeply.
    truncated: bool,
}

impl Converter<'_> {
    fn children(&mut self, parent: NodeRef<scraper::Node>, depth: usize) -> Vec<Node> {
        if depth >= MAX_DEPTH {
            if parent.has_children() && !self.truncated {
                self.truncated = true;
                self.sink.warn(warning!(
                    "elements nested deeper than {} levels were dropped", MAX_DEPTH;
                    hint: "flatten the markup"
                ));
            }
            return vec![];
        }

        parent.children().map(|child| self.node(child, depth)).collect()
    }

    fn node(&mut self, node: NodeRef<scraper::Node>, depth: usize) -> Node {
        match node.value() {
            scraper::Node::Element(element) => Node::Element(Element {
                tag: element.name().into(),
                attrs: element.attrs().map(|(k, v)| (k.into(), v.into())).collect(),
                children: self.children(node, depth + 1),
            }),
            scraper::Node::Text(text) => Node::Text((&**text).into()),
            _ => Node::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(document: &Document) -> &Element {
        document.children.iter().find_map(Node::as_element).unwrap().child("body").unwrap()
    }

    #[test]
    fn test_parse_inserts_implicit_elements() {
        let document = parse("<widget name=\"x\"></widget>", &mut Sink::new());
        let html = document.children.iter().find_map(Node::as_element).unwrap();
        assert_eq!(html.tag, "html");
        assert!(html.child("head").is_some());
        assert_eq!(body(&document).children.len(), 1);
    }

    #[test]
    fn test_parse_keeps_attribute_order() {
        let document = parse(
            "<html><body><box zeta=\"1\" alpha=\"2\" mid=\"\"></box></body></html>",
            &mut Sink::new(),
        );
        let element = body(&document).child("box").unwrap();
        let keys: Vec<_> = element.attrs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(element.attr("mid"), Some(""));
    }

    #[test]
    fn test_parse_marks_comments_as_other() {
        let document = parse("<html><body><!-- note --></body></html>", &mut Sink::new());
        assert_eq!(body(&document).children, [Node::Other]);
    }

    #[test]
    fn test_parse_truncates_deep_nesting() {
        let mut sink = Sink::new();
        let input = "<box>".repeat(MAX_DEPTH + 10);
        parse(&input, &mut sink);
        assert_eq!(sink.peek().len(), 1);
    }
}
