//! Classification of raw attribute and text values into Yuck literals.

use std::fmt::{self, Display, Formatter};

use ecow::EcoString;

/// A Yuck literal inferred from a raw HTML string.
///
/// Which variant a string becomes only depends on its shape, never on the
/// attribute or element it came from.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Literal {
    /// A base-10 integer, kept verbatim.
    Int(EcoString),
    /// An embedded `{...}` expression block, kept verbatim.
    Expr(EcoString),
    /// A `(...)` function-call expression, kept verbatim.
    Call(EcoString),
    /// The inner content of a `[...]` list literal.
    List(EcoString),
    /// A boolean.
    Bool(bool),
    /// Anything else, rendered in double quotes.
    Str(EcoString),
}

impl Literal {
    /// Classify a raw value.
    ///
    /// The checks run in a fixed order: integer, brace expression,
    /// parenthesized expression, bracketed list, boolean and finally string.
    pub fn infer(raw: &str) -> Self {
        if raw.parse::<i64>().is_ok() {
            return Self::Int(raw.into());
        }

        if is_delimited(raw, '{', '}') {
            return Self::Expr(raw.into());
        }

        if is_delimited(raw, '(', ')') {
            return Self::Call(raw.into());
        }

        if is_delimited(raw, '[', ']') {
            return Self::List(raw[1..raw.len() - 1].into());
        }

        if raw.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }

        if raw.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }

        Self::Str(raw.into())
    }

    /// A string literal, skipping inference.
    pub fn quoted(raw: &str) -> Self {
        Self::Str(raw.into())
    }
}

/// Whether `s` is longer than one byte and wrapped in `open` and `close`.
fn is_delimited(s: &str, open: char, close: char) -> bool {
    s.len() > 1 && s.starts_with(open) && s.ends_with(close)
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Int(v) | Self::Expr(v) | Self::Call(v) | Self::List(v) => f.write_str(v),
            Self::Bool(v) => write!(f, "{v}"),
            // Embedded quotes pass through unescaped.
            Self::Str(v) => write!(f, "\"{v}\""),
        }
    }
}
