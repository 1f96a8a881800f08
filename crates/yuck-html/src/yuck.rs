//! The structure of generated Yuck code, before it is turned into text.

use ecow::EcoString;

use crate::value::Literal;

/// A top-level Yuck definition.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Definition {
    /// A `(defwindow ...)` form.
    Window(Window),
    /// A `(defwidget ...)` form.
    Widget(Widget),
}

/// A window definition.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Window {
    /// The window's name. May be empty.
    pub name: EcoString,
    /// The window's own properties.
    pub attrs: Vec<Attr>,
    /// The `:geometry` block, rendered after all other properties.
    pub geometry: Option<Geometry>,
    /// The widgets placed into the window.
    pub children: Vec<Item>,
}

/// A widget definition.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Widget {
    /// The widget's name.
    pub name: EcoString,
    /// The parameter names of the widget.
    pub fields: Vec<EcoString>,
    /// The widget's body, one item per child of the `<widget>` element.
    pub body: Vec<Item>,
}

/// The `(geometry ...)` expression of a window.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Geometry {
    pub attrs: Vec<Attr>,
}

/// A `:key value` property. Without a value, it is a bare flag.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Attr {
    pub key: EcoString,
    pub value: Option<Literal>,
}

impl Attr {
    /// Create a property with a value.
    pub fn new(key: impl Into<EcoString>, value: Literal) -> Self {
        Self { key: key.into(), value: Some(value) }
    }

    /// Create a bare flag.
    pub fn flag(key: impl Into<EcoString>) -> Self {
        Self { key: key.into(), value: None }
    }
}

/// Something that can appear inside a form.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Item {
    /// A nested form.
    Form(Form),
    /// A positional value.
    Value(Literal),
}

/// A widget expression `(tag :key value ... children...)`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Form {
    pub tag: EcoString,
    pub attrs: Vec<Attr>,
    pub children: Vec<Item>,
}

impl Form {
    /// Create an empty form.
    pub fn new(tag: impl Into<EcoString>) -> Self {
        Self { tag: tag.into(), attrs: vec![], children: vec![] }
    }
}
