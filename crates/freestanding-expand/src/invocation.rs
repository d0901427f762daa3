//! The argument syntax of a freestanding macro invocation.
//!
//! ```text
//! invocation := (argument ("," argument)* ","?)? ("=>" block)?
//! argument   := (IDENT ":")? expr
//! ```

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::Token;

/// A single argument, like `value` or `body: || { .. }`.
#[derive(Debug, Clone)]
pub struct Argument {
    /// The optional label of the argument.
    pub label: Option<(syn::Ident, Token![:])>,
    /// The expression of the argument.
    pub expr: syn::Expr,
}

impl Argument {
    /// The label of the argument, if any.
    pub fn label(&self) -> Option<&syn::Ident> {
        self.label.as_ref().map(|(ident, _)| ident)
    }
}

impl Parse for Argument {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        // `a::b` is a path, only a lone `:` introduces a label.
        let label = if input.peek(syn::Ident) && input.peek2(Token![:]) && !input.peek2(Token![::])
        {
            Some((input.parse()?, input.parse()?))
        } else {
            None
        };

        Ok(Self {
            label,
            expr: input.parse()?,
        })
    }
}

impl ToTokens for Argument {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        if let Some((ident, colon)) = &self.label {
            ident.to_tokens(tokens);
            colon.to_tokens(tokens);
        }

        self.expr.to_tokens(tokens);
    }
}

/// The parsed invocation of a freestanding macro.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Arguments in the order they were written.
    pub arguments: Punctuated<Argument, Token![,]>,
    /// A trailing block following the arguments, as in `unwrap!(a => { .. })`.
    pub trailing: Option<(Token![=>], syn::Block)>,
}

impl Invocation {
    /// Number of arguments, not counting the trailing block.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Test if the invocation has no arguments.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Iterate over arguments.
    pub fn iter(&self) -> impl Iterator<Item = &Argument> + '_ {
        self.arguments.iter()
    }

    /// The trailing block, if any.
    pub fn trailing_block(&self) -> Option<&syn::Block> {
        self.trailing.as_ref().map(|(_, block)| block)
    }
}

impl Parse for Invocation {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let mut arguments = Punctuated::new();

        while !input.is_empty() && !input.peek(Token![=>]) {
            arguments.push_value(input.parse::<Argument>()?);

            if !input.peek(Token![,]) {
                break;
            }

            arguments.push_punct(input.parse::<Token![,]>()?);
        }

        let trailing = if input.peek(Token![=>]) {
            Some((input.parse()?, input.parse()?))
        } else {
            None
        };

        if !input.is_empty() {
            return Err(input.error("unexpected input, expected `,` or `=>`"));
        }

        Ok(Self {
            arguments,
            trailing,
        })
    }
}

impl ToTokens for Invocation {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.arguments.to_tokens(tokens);

        if let Some((arrow, block)) = &self.trailing {
            arrow.to_tokens(tokens);
            block.to_tokens(tokens);
        }
    }
}
