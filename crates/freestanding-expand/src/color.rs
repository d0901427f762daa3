//! The `color!` expression macro.

use proc_macro2::Span;
use syn::spanned::Spanned as _;

use crate::context::MacroContext;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::internals::Tokens;
use crate::invocation::Invocation;
use crate::literal;

/// Expands `color!(0xRRGGBB)` and `color!(space, 0xRRGGBB)` into a call to the
/// runtime color constructor.
pub(crate) struct ColorMacro;

impl ColorMacro {
    /// Expand the invocation.
    ///
    /// Returns `None` after reporting a diagnostic if the invocation is
    /// invalid.
    #[tracing::instrument(skip_all, fields(arguments = invocation.len()))]
    pub(crate) fn expand(
        &self,
        tokens: &Tokens,
        invocation: &Invocation,
        cx: &MacroContext,
    ) -> Option<syn::Expr> {
        let mut it = invocation.iter();

        let (color_space, rgb) = match (it.next(), it.next()) {
            (Some(color_space), Some(rgb)) => (Some(&color_space.expr), &rgb.expr),
            (Some(rgb), None) => (None, &rgb.expr),
            _ => {
                cx.report(Diagnostic::new(
                    cx.macro_span(),
                    DiagnosticKind::RequiresArgument,
                ));
                return None;
            }
        };

        let ignored = it.count();

        if ignored > 0 {
            tracing::trace!(ignored, "ignoring trailing arguments");
        }

        let Some(lit) = integer_literal(rgb) else {
            cx.report(Diagnostic::new(
                rgb.span(),
                DiagnosticKind::RequiresIntegerLiteral,
            ));
            return None;
        };

        let string = lit.to_string();

        let Some(channels) = literal::validate(&string) else {
            cx.report(Diagnostic::new(
                lit.span(),
                DiagnosticKind::MalformedHexadecimalRepresentation { string },
            ));
            return None;
        };

        tracing::trace!(?channels, "validated");

        let color = &tokens.color;

        let color_space = match color_space {
            Some(color_space) => color_space.clone(),
            None => {
                let path = &tokens.default_color_space;
                syn::parse_quote!(#path)
            }
        };

        let span = lit.span();
        let red = channel(channels.red, span);
        let green = channel(channels.green, span);
        let blue = channel(channels.blue, span);

        Some(syn::parse_quote!(#color::new(#color_space, #red, #green, #blue)))
    }
}

/// Look through invisible groups, which are produced when an expression is
/// forwarded through a `macro_rules!` fragment.
fn integer_literal(expr: &syn::Expr) -> Option<&syn::LitInt> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(lit),
            ..
        }) => Some(lit),
        syn::Expr::Group(group) => integer_literal(&group.expr),
        _ => None,
    }
}

/// A float literal for the channel, written as [literal::format_channel]
/// prints it with a `.0` added to whole numbers.
fn channel(value: f64, span: Span) -> syn::LitFloat {
    let mut text = literal::format_channel(value);

    if !text.contains('.') {
        text.push_str(".0");
    }

    syn::LitFloat::new(&text, span)
}
