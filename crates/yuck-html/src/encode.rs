use crate::value::Literal;
use crate::yuck::{Attr, Definition, Form, Geometry, Item, Widget, Window};

/// The first line of every generated file.
pub const HEADER: &str = ";; Auto-generated Yuck widgets from HTML ;;";

/// Nesting level of the children of a `defwindow`.
const WINDOW_LEVEL: usize = 1;

/// Nesting level of the body of a `defwidget`.
const WIDGET_LEVEL: usize = 2;

/// Encodes definitions into Yuck source text.
pub fn yuck(defs: &[Definition]) -> String {
    let mut w = Writer::default();
    w.buf.push_str(HEADER);
    w.buf.push_str("\n\n");
    for (i, def) in defs.iter().enumerate() {
        if i > 0 {
            w.buf.push('\n');
        }
        match def {
            Definition::Window(window) => write_window(&mut w, window),
            Definition::Widget(widget) => write_widget(&mut w, widget),
        }
        w.buf.push('\n');
    }
    w.buf
}

#[derive(Default)]
struct Writer {
    buf: String,
    /// current indentation level
    level: usize,
}

/// Write a newline and indent.
fn write_indent(w: &mut Writer) {
    w.buf.push('\n');
    for _ in 0..w.level {
        w.buf.push_str("  ");
    }
}

/// Encode a window definition.
fn write_window(w: &mut Writer, window: &Window) {
    w.buf.push_str("(defwindow");
    write_name(w, &window.name);

    w.level = WINDOW_LEVEL;
    for attr in &window.attrs {
        write_indent(w);
        write_attr(w, attr);
    }
    if let Some(geometry) = &window.geometry {
        write_indent(w);
        write_geometry(w, geometry);
    }
    for item in &window.children {
        write_item(w, item);
    }
    w.level = 0;

    w.buf.push(')');
}

/// Encode a widget definition.
fn write_widget(w: &mut Writer, widget: &Widget) {
    w.buf.push_str("(defwidget");
    write_name(w, &widget.name);

    w.buf.push_str(" [");
    for (i, field) in widget.fields.iter().enumerate() {
        if i > 0 {
            w.buf.push(' ');
        }
        w.buf.push_str(field);
    }
    w.buf.push(']');

    w.level = WIDGET_LEVEL;
    for item in &widget.body {
        write_item(w, item);
    }
    w.level = 0;

    w.buf.push(')');
}

fn write_name(w: &mut Writer, name: &str) {
    if !name.is_empty() {
        w.buf.push(' ');
        w.buf.push_str(name);
    }
}

/// Encode the `:geometry` property of a window.
///
/// The pairs always continue at a two-space indent, regardless of nesting.
fn write_geometry(w: &mut Writer, geometry: &Geometry) {
    w.buf.push_str(":geometry (geometry ");
    for (i, attr) in geometry.attrs.iter().enumerate() {
        if i > 0 {
            w.buf.push_str("\n  ");
        }
        write_attr(w, attr);
    }
    w.buf.push(')');
}

/// Encode a form or a positional value at the current level.
fn write_item(w: &mut Writer, item: &Item) {
    match item {
        Item::Form(form) => write_form(w, form),
        Item::Value(value) => write_value(w, value),
    }
}

/// Encode one form, then its properties one level deeper, then its children.
fn write_form(w: &mut Writer, form: &Form) {
    write_indent(w);
    w.buf.push('(');
    w.buf.push_str(&form.tag);

    w.level += 1;
    for attr in &form.attrs {
        write_indent(w);
        write_attr(w, attr);
    }
    for child in &form.children {
        write_item(w, child);
    }
    w.level -= 1;

    w.buf.push(')');
}

fn write_attr(w: &mut Writer, attr: &Attr) {
    w.buf.push(':');
    w.buf.push_str(&attr.key);
    if let Some(value) = &attr.value {
        write_value(w, value);
    }
}

fn write_value(w: &mut Writer, value: &Literal) {
    w.buf.push(' ');
    w.buf.push_str(&value.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn test(def: Definition, body: &str) {
        let text = yuck(&[def]);
        let text = text.strip_prefix(HEADER).unwrap().strip_prefix("\n\n").unwrap();
        assert_eq!(text, body);
    }

    fn label(text: &str) -> Form {
        let mut form = Form::new("label");
        form.attrs.push(Attr::new("text", Literal::infer(text)));
        form
    }

    #[test]
    fn test_encode_header_only() {
        assert_eq!(yuck(&[]), ";; Auto-generated Yuck widgets from HTML ;;\n\n");
    }

    #[test]
    fn test_encode_widget() {
        let mut boxed = Form::new("box");
        boxed.attrs.push(Attr::new("spacing", Literal::infer("4")));
        boxed.children.push(Item::Form(label("hi")));
        boxed.children.push(Item::Value(Literal::infer("hello")));

        test(
            Definition::Widget(Widget {
                name: "w1".into(),
                fields: vec!["class".into(), "orientation".into()],
                body: vec![Item::Form(boxed)],
            }),
            "(defwidget w1 [class orientation]\n    \
               (box\n      \
                 :spacing 4\n      \
                 (label\n        \
                   :text \"hi\") \"hello\"))\n",
        );
    }

    #[test]
    fn test_encode_widget_with_several_items() {
        test(
            Definition::Widget(Widget {
                name: "pair".into(),
                fields: vec![],
                body: vec![
                    Item::Form(Form::new("box")),
                    Item::Value(Literal::infer("7")),
                    Item::Form(label("x")),
                ],
            }),
            "(defwidget pair []\n    (box) 7\n    (label\n      :text \"x\"))\n",
        );
    }

    #[test]
    fn test_encode_empty_widget() {
        test(
            Definition::Widget(Widget { name: "e".into(), fields: vec![], body: vec![] }),
            "(defwidget e [])\n",
        );
    }

    #[test]
    fn test_encode_window() {
        test(
            Definition::Window(Window {
                name: "bar".into(),
                attrs: vec![
                    Attr::new("monitor", Literal::quoted("0")),
                    Attr::flag("exclusive"),
                ],
                geometry: Some(Geometry {
                    attrs: vec![
                        Attr::new("x", Literal::quoted("0")),
                        Attr::new("y", Literal::quoted("0")),
                    ],
                }),
                children: vec![Item::Form(Form::new("box"))],
            }),
            "(defwindow bar\n  \
               :monitor \"0\"\n  \
               :exclusive\n  \
               :geometry (geometry :x \"0\"\n  :y \"0\")\n  \
               (box))\n",
        );
    }

    #[test]
    fn test_encode_anonymous_window() {
        test(
            Definition::Window(Window {
                name: "".into(),
                attrs: vec![],
                geometry: None,
                children: vec![],
            }),
            "(defwindow)\n",
        );
    }

    #[test]
    fn test_encode_separates_definitions() {
        let widget = |name: &str| {
            Definition::Widget(Widget { name: name.into(), fields: vec![], body: vec![] })
        };
        assert_eq!(
            yuck(&[widget("a"), widget("b")]),
            format!("{HEADER}\n\n(defwidget a [])\n\n(defwidget b [])\n"),
        );
    }
}
