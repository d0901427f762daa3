//! Diagnostics reported while expanding a macro.

use std::fmt;

use proc_macro2::Span;
use thiserror::Error;

/// A diagnostic attached to a span of the invocation.
///
/// Reporting a diagnostic never aborts an expansion. The expander which
/// reports it is expected to return an empty expansion right after.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The span the diagnostic applies to.
    span: Span,
    /// The kind of the diagnostic.
    kind: DiagnosticKind,
}

impl Diagnostic {
    /// Construct a new diagnostic.
    pub fn new(span: Span, kind: DiagnosticKind) -> Self {
        Self { span, kind }
    }

    /// The span the diagnostic applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The kind of the diagnostic.
    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    /// Convert into a `syn::Error` which can be rendered as a compile error.
    pub fn into_error(self) -> syn::Error {
        syn::Error::new(self.span, self.kind)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

/// The kind of a [Diagnostic].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DiagnosticKind {
    /// `color!` was invoked without any arguments.
    #[error("color! requires a hexadecimal integer literal argument")]
    RequiresArgument,
    /// The color argument of `color!` is not an integer literal.
    #[error("color! requires an integer literal")]
    RequiresIntegerLiteral,
    /// The color literal is not of the form `0xRRGGBB`.
    #[error("Invalid hexadecimal representation of RGB color: {string}")]
    MalformedHexadecimalRepresentation {
        /// The source text of the offending literal.
        string: String,
    },
}
