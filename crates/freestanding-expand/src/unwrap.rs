//! The `unwrap!` declaration macro.
//!
//! ```text
//! unwrap!(a, b => {
//!     println!("{a} {b}");
//! });
//! ```
//!
//! Expands into one guard per value, followed by the body:
//!
//! ```text
//! let ::core::option::Option::Some(a) = a else {
//!     #[cfg(debug_assertions)]
//!     ::freestanding::report_failed_unwrapping("Unexpected None value: a", file!(), line!());
//!     return;
//! };
//! let ::core::option::Option::Some(b) = b else { .. };
//! println!("{a} {b}");
//! ```

use quote::quote;
use syn::spanned::Spanned as _;
use syn::Token;

use crate::context::{MacroContext, SourceLocation};
use crate::internals::{Tokens, BODY};
use crate::invocation::Invocation;
use crate::options::UnwrapStrategy;

/// The body of an invocation, either a labeled argument or the trailing block.
enum Body<'a> {
    Closure(&'a syn::ExprClosure),
    Block(&'a syn::Block),
}

impl Body<'_> {
    /// The statements of the body, with a trailing expression terminated so
    /// that it can be followed by more statements.
    ///
    /// A closure without a block body contributes its expression as a single
    /// statement.
    fn statements(&self) -> Vec<syn::Stmt> {
        let block = match self {
            Body::Block(block) => *block,
            Body::Closure(closure) => match &*closure.body {
                syn::Expr::Block(expr) if expr.label.is_none() => &expr.block,
                body => return vec![terminated(body)],
            },
        };

        block
            .stmts
            .iter()
            .map(|stmt| match stmt {
                syn::Stmt::Expr(expr, None) => terminated(expr),
                stmt => stmt.clone(),
            })
            .collect()
    }
}

pub(crate) struct UnwrapMacro {
    strategy: UnwrapStrategy,
}

impl UnwrapMacro {
    /// Construct an expander using the given body strategy.
    pub(crate) fn new(strategy: UnwrapStrategy) -> Self {
        Self { strategy }
    }

    /// Expand the invocation into guards followed by the body.
    ///
    /// Malformed invocations are errors rather than diagnostics, no partial
    /// expansion is produced for them.
    #[tracing::instrument(skip_all, fields(strategy = ?self.strategy, arguments = invocation.len()))]
    pub(crate) fn expand(
        &self,
        tokens: &Tokens,
        invocation: &Invocation,
        cx: &MacroContext,
    ) -> syn::Result<Vec<syn::Stmt>> {
        let mut wrapped = Vec::new();
        let mut labeled = None;

        for argument in invocation.iter() {
            match argument.label() {
                Some(label) if label == BODY => {
                    if labeled.is_some() {
                        return Err(syn::Error::new_spanned(
                            argument,
                            format_args!("unwrap! accepts a single `{BODY}` argument"),
                        ));
                    }

                    labeled = Some(argument);
                }
                _ => wrapped.push(&argument.expr),
            }
        }

        let body = match (labeled, invocation.trailing_block()) {
            (Some(argument), None) => body_argument(&argument.expr)?,
            (None, Some(block)) => Body::Block(block),
            (Some(argument), Some(_)) => {
                return Err(syn::Error::new_spanned(
                    argument,
                    format_args!("unwrap! accepts either a `{BODY}` argument or a trailing block, not both"),
                ));
            }
            (None, None) => {
                return Err(syn::Error::new(
                    cx.macro_span(),
                    format_args!("unwrap! requires a `{BODY}` argument or a trailing block"),
                ));
            }
        };

        let location = cx.location(cx.macro_span());

        let mut output = Vec::with_capacity(wrapped.len() + 1);

        for expr in wrapped {
            output.push(guard(tokens, &location, expr)?);
        }

        tracing::trace!(guards = output.len());

        match self.strategy {
            UnwrapStrategy::Inline => {
                output.extend(body.statements());
            }
            UnwrapStrategy::Closure => {
                let call = match body {
                    Body::Closure(closure) => quote!((#closure)();),
                    Body::Block(block) => quote!((|| #block)();),
                };

                output.push(syn::parse2(call)?);
            }
        }

        Ok(output)
    }
}

fn body_argument(expr: &syn::Expr) -> syn::Result<Body<'_>> {
    match expr {
        syn::Expr::Closure(closure) => {
            if !closure.inputs.is_empty() {
                return Err(syn::Error::new_spanned(
                    &closure.inputs,
                    "unwrap! body closures take no arguments",
                ));
            }

            Ok(Body::Closure(closure))
        }
        syn::Expr::Block(block) if block.label.is_none() => Ok(Body::Block(&block.block)),
        syn::Expr::Group(group) => body_argument(&group.expr),
        expr => Err(syn::Error::new_spanned(
            expr,
            "unwrap! body must be a closure `|| { .. }` or a block `{ .. }`",
        )),
    }
}

/// The identifier a value is bound to, which is the value itself.
fn binding(expr: &syn::Expr) -> syn::Result<&syn::Ident> {
    match expr {
        syn::Expr::Path(path) if path.qself.is_none() && path.attrs.is_empty() => {
            path.path.get_ident().ok_or_else(|| {
                syn::Error::new_spanned(path, "unwrap! arguments must be plain identifiers")
            })
        }
        syn::Expr::Group(group) => binding(&group.expr),
        expr => Err(syn::Error::new_spanned(
            expr,
            "unwrap! arguments must be plain identifiers",
        )),
    }
}

fn guard(tokens: &Tokens, location: &SourceLocation, expr: &syn::Expr) -> syn::Result<syn::Stmt> {
    let ident = binding(expr)?;

    let some = &tokens.option_some;
    let report = &tokens.report_failed_unwrapping;
    let message = format!("Unexpected None value: {ident}");
    let file = location.file_tokens(&tokens.file);
    let line = location.line_tokens(&tokens.line);

    Ok(syn::parse_quote_spanned! { expr.span() =>
        let #some(#ident) = #ident else {
            #[cfg(debug_assertions)]
            #report(#message, #file, #line);
            return;
        };
    })
}

fn terminated(expr: &syn::Expr) -> syn::Stmt {
    syn::Stmt::Expr(expr.clone(), Some(<Token![;]>::default()))
}
