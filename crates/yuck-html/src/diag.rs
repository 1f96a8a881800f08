//! Diagnostics.

use std::fmt::{self, Display, Formatter};

use ecow::{EcoVec, eco_vec};

/// Construct a [`Diagnostic`] with severity `Warning`.
///
/// You can also attach hints with the `; hint: "..."` syntax.
///
/// ```ignore
/// warning!("skipping <{}>", tag);
/// warning!(
///     "skipping <{}>", tag;
///     hint: "only <window> and <widget> are supported here"
/// );
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! __warning {
    (
        $fmt:literal $(, $arg:expr)*
        $(; hint: $hint:literal $(, $hint_arg:expr)*)*
        $(,)?
    ) => {
        $crate::diag::Diagnostic::warning(
            $crate::diag::eco_format!($fmt, $($arg),*),
        ) $(.with_hint($crate::diag::eco_format!($hint, $($hint_arg),*)))*
    };
}

#[rustfmt::skip]
#[doc(inline)]
pub use {
    crate::__warning as warning,
    ecow::{eco_format, EcoString},
};

/// A result whose error aborts the translation of one document.
pub type TranspileResult<T> = Result<T, TranspileError>;

/// A structural problem that makes a document untranslatable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TranspileError {
    /// The document has no `<html>` element.
    MissingRoot,
    /// The `<html>` element has no `<body>` element.
    MissingBody,
}

impl TranspileError {
    /// A hint on how to fix the document.
    pub fn hint(self) -> &'static str {
        match self {
            Self::MissingRoot => "wrap the definitions in <html><body>...</body></html>",
            Self::MissingBody => "place the definitions inside a <body> element",
        }
    }
}

impl Display for TranspileError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::MissingRoot => f.pad("no <html> tag found in input"),
            Self::MissingBody => f.pad("no <body> tag found inside <html>"),
        }
    }
}

impl std::error::Error for TranspileError {}

/// An output alongside warnings generated while producing it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Warned<T> {
    /// The produced output.
    pub output: T,
    /// Warnings generated while producing the output.
    pub warnings: EcoVec<Diagnostic>,
}

/// An error or warning about the translated document.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Diagnostic {
    /// Whether the diagnostic is an error or a warning.
    pub severity: Severity,
    /// A diagnostic message describing the problem.
    pub message: EcoString,
    /// Additional hints to the user, indicating how this problem could be avoided
    /// or worked around.
    pub hints: EcoVec<EcoString>,
}

/// The severity of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Severity {
    /// A fatal error.
    Error,
    /// A non-fatal warning.
    Warning,
}

impl Diagnostic {
    /// Create a new, bare error.
    pub fn error(message: impl Into<EcoString>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            hints: eco_vec![],
        }
    }

    /// Create a new, bare warning.
    pub fn warning(message: impl Into<EcoString>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            hints: eco_vec![],
        }
    }

    /// Adds a single hint to the diagnostic.
    pub fn hint(&mut self, hint: impl Into<EcoString>) {
        self.hints.push(hint.into());
    }

    /// Adds a single hint to the diagnostic.
    pub fn with_hint(mut self, hint: impl Into<EcoString>) -> Self {
        self.hint(hint);
        self
    }
}

impl From<TranspileError> for Diagnostic {
    fn from(error: TranspileError) -> Self {
        Self::error(eco_format!("{error}")).with_hint(error.hint())
    }
}

/// Collects the non-fatal diagnostics of one translation.
///
/// The core never prints anything itself. Whoever drives a translation owns
/// the sink and decides what to do with its contents afterwards.
#[derive(Debug, Default, Clone)]
pub struct Sink {
    warnings: EcoVec<Diagnostic>,
}

impl Sink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning.
    pub fn warn(&mut self, warning: Diagnostic) {
        self.warnings.push(warning);
    }

    /// The warnings collected so far.
    pub fn peek(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Get the stored warnings.
    pub fn warnings(self) -> EcoVec<Diagnostic> {
        self.warnings
    }
}
