//! The registry of freestanding macros and dispatch to their expanders.

use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens};

use crate::color::ColorMacro;
use crate::context::MacroContext;
use crate::internals::Tokens;
use crate::invocation::Invocation;
use crate::options::Options;
use crate::unique_name::UniqueNameMacro;
use crate::unwrap::UnwrapMacro;

/// Where a macro may be invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The macro stands in for an expression.
    Expression,
    /// The macro stands in for a sequence of statements.
    Declaration,
}

/// A registered macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroKind {
    /// `color!(0xRRGGBB)` or `color!(space, 0xRRGGBB)`.
    Color,
    /// `unwrap!(a, b => { .. })` or `unwrap!(a, b, body: || { .. })`.
    Unwrap,
    /// `unique_name!()`.
    UniqueName,
}

impl MacroKind {
    /// Every registered macro.
    pub const MANIFEST: &'static [MacroKind] =
        &[MacroKind::Color, MacroKind::Unwrap, MacroKind::UniqueName];

    /// The external name of the macro.
    pub fn name(self) -> &'static str {
        match self {
            MacroKind::Color => "color",
            MacroKind::Unwrap => "unwrap",
            MacroKind::UniqueName => "unique_name",
        }
    }

    /// Look up a macro by its external name.
    ///
    /// # Examples
    ///
    /// ```
    /// use freestanding_expand::MacroKind;
    ///
    /// assert_eq!(MacroKind::from_name("unwrap"), Some(MacroKind::Unwrap));
    /// assert_eq!(MacroKind::from_name("stringify"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::MANIFEST
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
    }

    /// Where the macro may be invoked.
    pub fn position(self) -> Position {
        match self {
            MacroKind::Color => Position::Expression,
            MacroKind::Unwrap | MacroKind::UniqueName => Position::Declaration,
        }
    }
}

/// The replacement for a macro invocation.
#[derive(Debug, Clone)]
pub enum Expansion {
    /// A replacement expression.
    Expr(syn::Expr),
    /// A replacement sequence of statements, in order.
    Stmts(Vec<syn::Stmt>),
    /// No replacement, diagnostics describe why.
    Empty,
}

impl Expansion {
    /// Test if the expansion is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Expansion::Empty)
    }
}

impl ToTokens for Expansion {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Expansion::Expr(expr) => expr.to_tokens(tokens),
            Expansion::Stmts(stmts) => {
                for stmt in stmts {
                    stmt.to_tokens(tokens);
                }
            }
            Expansion::Empty => {}
        }
    }
}

/// Dispatches invocations to the expander of the matching macro.
pub struct Expander {
    tokens: Tokens,
    color: ColorMacro,
    unwrap: UnwrapMacro,
    unique_name: UniqueNameMacro,
}

impl Expander {
    /// Construct an expander from the given options.
    pub fn new(options: &Options) -> Self {
        Self {
            tokens: Tokens::with_module(options.module.as_ref()),
            color: ColorMacro,
            unwrap: UnwrapMacro::new(options.unwrap_strategy),
            unique_name: UniqueNameMacro,
        }
    }

    /// Expand an invocation of the given macro.
    ///
    /// Recoverable problems are reported to `cx` and result in
    /// [Expansion::Empty]. Malformed invocations are returned as errors.
    #[tracing::instrument(skip(self, invocation, cx))]
    pub fn expand(
        &self,
        kind: MacroKind,
        invocation: &Invocation,
        cx: &MacroContext,
    ) -> syn::Result<Expansion> {
        let expansion = match kind {
            MacroKind::Color => match self.color.expand(&self.tokens, invocation, cx) {
                Some(expr) => Expansion::Expr(expr),
                None => Expansion::Empty,
            },
            MacroKind::Unwrap => {
                Expansion::Stmts(self.unwrap.expand(&self.tokens, invocation, cx)?)
            }
            MacroKind::UniqueName => Expansion::Stmts(self.unique_name.expand(invocation, cx)?),
        };

        Ok(expansion)
    }
}

/// Expand an invocation of `kind` whose arguments are `input`, rendering the
/// expansion and any diagnostics into a token stream for the compiler.
///
/// `span` is the span of the whole invocation.
pub fn expand(kind: MacroKind, options: &Options, span: Span, input: TokenStream) -> TokenStream {
    let cx = MacroContext::new(span);
    render(kind, options, &cx, input)
}

/// Expand using an existing context, see [expand].
pub fn render(kind: MacroKind, options: &Options, cx: &MacroContext, input: TokenStream) -> TokenStream {
    let result = syn::parse2::<Invocation>(input)
        .and_then(|invocation| Expander::new(options).expand(kind, &invocation, cx));

    let mut errors = cx
        .take_diagnostics()
        .into_iter()
        .map(|diagnostic| diagnostic.into_error().into_compile_error())
        .collect::<Vec<_>>();

    let expansion = match result {
        Ok(expansion) => expansion,
        Err(error) => {
            errors.push(error.into_compile_error());
            Expansion::Empty
        }
    };

    if errors.is_empty() {
        return expansion.into_token_stream();
    }

    match kind.position() {
        Position::Expression => quote!(#(#errors)*),
        Position::Declaration => quote!(#(#errors;)*),
    }
}
