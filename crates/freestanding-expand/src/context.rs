//! Context for a running macro expansion.

use std::cell::{Cell, RefCell};

use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned, ToTokens};

use crate::diagnostics::Diagnostic;

/// The location of a macro invocation as seen by generated code.
#[derive(Debug, Clone)]
pub enum SourceLocation {
    /// A location which has already been resolved.
    Fixed {
        /// Path of the file containing the invocation.
        file: String,
        /// One-based line of the invocation.
        line: u32,
    },
    /// A location left for the compiler to resolve through `file!()` and
    /// `line!()` at the given span.
    Deferred(Span),
}

impl SourceLocation {
    /// Generate an expression evaluating to the file of the location.
    pub(crate) fn file_tokens(&self, file_macro: &syn::Path) -> TokenStream {
        match self {
            SourceLocation::Fixed { file, .. } => quote!(#file),
            SourceLocation::Deferred(span) => quote_spanned!(*span=> #file_macro!()),
        }
    }

    /// Generate an expression evaluating to the line of the location.
    pub(crate) fn line_tokens(&self, line_macro: &syn::Path) -> TokenStream {
        match self {
            SourceLocation::Fixed { line, .. } => {
                proc_macro2::Literal::u32_unsuffixed(*line).into_token_stream()
            }
            SourceLocation::Deferred(span) => quote_spanned!(*span=> #line_macro!()),
        }
    }
}

/// Context for a running macro.
///
/// One context is constructed for every invocation site and dropped once the
/// expansion has been rendered. It collects diagnostics and hands out unique
/// names.
pub struct MacroContext {
    /// Span of the full macro invocation.
    macro_span: Span,
    /// Location override used instead of deferring to the compiler.
    location: Option<(String, u32)>,
    /// Diagnostics reported so far.
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Counter for allocated names.
    names: Cell<usize>,
}

impl MacroContext {
    /// Construct a context for an invocation spanning `macro_span`.
    pub fn new(macro_span: Span) -> Self {
        Self {
            macro_span,
            location: None,
            diagnostics: RefCell::new(Vec::new()),
            names: Cell::new(0),
        }
    }

    /// Construct an empty context which can be used for testing, with all
    /// locations resolving to `main.rs` line `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use freestanding_expand::MacroContext;
    ///
    /// MacroContext::test(|cx| assert!(!cx.has_diagnostics()));
    /// ```
    pub fn test<F, O>(f: F) -> O
    where
        F: FnOnce(&MacroContext) -> O,
    {
        let cx = Self::new(Span::call_site()).with_location("main.rs", 1);
        f(&cx)
    }

    /// Resolve every location to the given file and line instead of deferring
    /// to the compiler.
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.location = Some((file.into(), line));
        self
    }

    /// The span of the macro invocation.
    pub fn macro_span(&self) -> Span {
        self.macro_span
    }

    /// Resolve the source location of the given span.
    pub fn location(&self, span: Span) -> SourceLocation {
        match &self.location {
            Some((file, line)) => SourceLocation::Fixed {
                file: file.clone(),
                line: *line,
            },
            None => SourceLocation::Deferred(span),
        }
    }

    /// Report a diagnostic.
    pub fn report(&self, diagnostic: Diagnostic) {
        tracing::trace!(%diagnostic, "report");
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Test if any diagnostics have been reported.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Take all reported diagnostics out of the context.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Allocate a name which is unique to this expansion.
    ///
    /// Names allocated from the same context are textually distinct. They are
    /// spanned with mixed-site hygiene, so they can neither be referenced by
    /// nor collide with identifiers written at the invocation site, or names
    /// allocated by other invocations.
    pub fn unique_name(&self, hint: &str) -> syn::Ident {
        let n = self.names.get();
        self.names.set(n + 1);
        syn::Ident::new(&format!("__{hint}_{n}"), Span::mixed_site())
    }
}
