use ecow::EcoString;

use crate::diag::{Sink, TranspileError, TranspileResult, warning};
use crate::dom::{Document, Element, MAX_DEPTH, Node};
use crate::value::Literal;
use crate::yuck::{Attr, Definition, Form, Geometry, Item, Widget, Window};

/// Finds the `<body>` element inside the document's `<html>` element.
pub fn find_body(document: &Document) -> TranspileResult<&Element> {
    let html = document
        .children
        .iter()
        .filter_map(Node::as_element)
        .find(|element| element.tag == "html")
        .ok_or(TranspileError::MissingRoot)?;
    html.child("body").ok_or(TranspileError::MissingBody)
}

/// Converts the children of `<body>` into top-level definitions.
pub fn definitions(body: &Element, sink: &mut Sink) -> Vec<Definition> {
    let mut defs = vec![];
    for child in &body.children {
        let element = match child {
            Node::Element(element) => element,
            Node::Text(text) => {
                sink.warn(warning!(
                    "skipping top-level text \"{}\"", text;
                    hint: "text is only allowed inside a <window> or <widget>"
                ));
                continue;
            }
            Node::Other => {
                sink.warn(warning!("skipping top-level comment or doctype"));
                continue;
            }
        };

        let name: EcoString = element.attr("name").unwrap_or_default().into();
        match element.tag.as_str() {
            "window" => defs.push(Definition::Window(window(element, name, sink))),
            "widget" => defs.push(Definition::Widget(widget(element, name, sink))),
            tag => sink.warn(warning!(
                "unhandled top-level tag <{}>; skipping", tag;
                hint: "only <window> and <widget> can appear directly inside <body>"
            )),
        }
    }
    defs
}

/// Builds a `defwindow` from a `<window>` element.
fn window(element: &Element, name: EcoString, sink: &mut Sink) -> Window {
    if name.is_empty() {
        sink.warn(warning!("window has no name"; hint: "add a `name` attribute"));
    }

    let attrs = element
        .attrs
        .iter()
        .filter(|(key, _)| key != "name")
        .map(|(key, value)| {
            if value.is_empty() {
                Attr::flag(key.clone())
            } else {
                Attr::new(key.clone(), Literal::quoted(value))
            }
        })
        .collect();

    let geometry_index = element.children.iter().position(
        |node| matches!(node, Node::Element(child) if child.tag == "geometry"),
    );

    let geometry = geometry_index
        .and_then(|i| element.children[i].as_element())
        .map(|geometry| Geometry {
            attrs: geometry
                .attrs
                .iter()
                .map(|(key, value)| Attr::new(key.clone(), Literal::quoted(value)))
                .collect(),
        });

    let mut children = vec![];
    for (i, child) in element.children.iter().enumerate() {
        if let Node::Element(extra) = child
            && extra.tag == "geometry"
        {
            if Some(i) != geometry_index {
                sink.warn(warning!(
                    "window `{}` has more than one <geometry>", name;
                    hint: "only the first one is used as the window geometry"
                ));
            }
            continue;
        }
        lower(child, 0, sink, &mut children);
    }

    Window { name, attrs, geometry, children }
}

/// Builds a `defwidget` from a `<widget>` element.
fn widget(element: &Element, name: EcoString, sink: &mut Sink) -> Widget {
    if name.is_empty() {
        sink.warn(warning!("widget has no name"; hint: "add a `name` attribute"));
    }

    let fields = element
        .attrs
        .iter()
        .filter(|(key, _)| key != "name")
        .map(|(key, _)| key.clone())
        .collect();

    let mut body = vec![];
    for child in &element.children {
        lower(child, 0, sink, &mut body);
    }

    Widget { name, fields, body }
}

/// Lowers a node and its subtree into forms and values.
fn lower(node: &Node, depth: usize, sink: &mut Sink, out: &mut Vec<Item>) {
    match node {
        Node::Text(text) => out.push(Item::Value(Literal::infer(text))),
        Node::Element(element) if depth >= MAX_DEPTH => sink.warn(warning!(
            "<{}> is nested deeper than {} levels and was dropped", element.tag, MAX_DEPTH
        )),
        Node::Element(element) if element.tag.is_empty() => {
            sink.warn(warning!("element without a tag name; keeping only its children"));
            for child in &element.children {
                lower(child, depth + 1, sink, out);
            }
        }
        Node::Element(element) => {
            let mut form = Form::new(element.tag.clone());
            form.attrs = element
                .attrs
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(key, value)| Attr::new(key.clone(), Literal::infer(value)))
                .collect();
            for child in &element.children {
                lower(child, depth + 1, sink, &mut form.children);
            }
            out.push(Item::Form(form));
        }
        Node::Other => {}
    }
}
