//! Transpiles HTML markup into Yuck, the widget language of eww.
//!
//! The input is a regular HTML document whose `<body>` contains `<window>`
//! and `<widget>` elements:
//!
//! ```html
//! <html><body>
//!   <widget name="greeting" class="box">
//!     <box><label text="hi"/></box>
//!   </widget>
//! </body></html>
//! ```
//!
//! Each `<window>` becomes a `defwindow` and each `<widget>` a `defwidget`.
//! Nested elements turn into widget expressions whose attributes become
//! properties. Attribute values and text are classified into Yuck literals:
//! integers, booleans, `{...}` and `(...)` expressions and `[...]` lists
//! are emitted as is, everything else is quoted.
//!
//! Translation is a pure function. Problems that do not stop it are collected
//! in a [`Sink`](diag::Sink) instead of being printed.

pub mod diag;
pub mod dom;
pub mod value;
pub mod yuck;

mod convert;
mod encode;
mod normalize;
mod parse;

pub use self::convert::{definitions, find_body};
pub use self::encode::{HEADER, yuck};
pub use self::normalize::normalize;
pub use self::parse::parse;

use crate::diag::{Sink, TranspileResult, Warned};
use crate::dom::Document;

/// Transpiles an HTML document into Yuck source text.
pub fn transpile(input: &str) -> Warned<TranspileResult<String>> {
    let mut sink = Sink::new();
    let output = transpile_with(input, &mut sink);
    Warned { output, warnings: sink.warnings() }
}

/// Transpiles an HTML document, reporting warnings into the given sink.
pub fn transpile_with(input: &str, sink: &mut Sink) -> TranspileResult<String> {
    let document = parse(input, sink);
    transpile_document(&document, sink)
}

/// Transpiles an already parsed document.
pub fn transpile_document(document: &Document, sink: &mut Sink) -> TranspileResult<String> {
    let document = normalize(document.clone());
    let body = find_body(&document)?;
    let defs = definitions(body, sink);
    Ok(yuck(&defs))
}
