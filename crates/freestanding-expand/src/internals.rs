use std::fmt;

use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::Token;

#[derive(Copy, Clone)]
pub struct Symbol(&'static str);

pub const FREESTANDING: Symbol = Symbol("freestanding");
pub const BODY: Symbol = Symbol("body");
pub const UNIQUE: Symbol = Symbol("unique");

impl Symbol {
    /// Access the underlying string.
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl PartialEq<Symbol> for syn::Ident {
    fn eq(&self, word: &Symbol) -> bool {
        self == word.0
    }
}

impl<'a> PartialEq<Symbol> for &'a syn::Ident {
    fn eq(&self, word: &Symbol) -> bool {
        *self == word.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

/// Paths referenced by generated code.
pub(crate) struct Tokens {
    pub(crate) color: syn::Path,
    pub(crate) default_color_space: syn::Path,
    pub(crate) file: syn::Path,
    pub(crate) line: syn::Path,
    pub(crate) option_some: syn::Path,
    pub(crate) report_failed_unwrapping: syn::Path,
}

impl Tokens {
    /// Build tokens relative to the given runtime module, or `::freestanding`
    /// if none is specified.
    pub(crate) fn with_module(module: Option<&syn::Path>) -> Self {
        let core = global(["core"]);

        let default_module;

        let m = match module {
            Some(module) => module,
            None => {
                default_module = global([FREESTANDING.as_str()]);
                &default_module
            }
        };

        Tokens {
            color: path(m, ["Color"]),
            default_color_space: path(m, ["ColorSpace", "Srgb"]),
            file: path(&core, ["file"]),
            line: path(&core, ["line"]),
            option_some: path(&core, ["option", "Option", "Some"]),
            report_failed_unwrapping: path(m, ["report_failed_unwrapping"]),
        }
    }
}

fn global<const N: usize>(segments: [&'static str; N]) -> syn::Path {
    let base = syn::Path {
        leading_colon: Some(<Token![::]>::default()),
        segments: Punctuated::default(),
    };

    path(&base, segments)
}

fn path<const N: usize>(base: &syn::Path, path: [&'static str; N]) -> syn::Path {
    let mut base = base.clone();

    for s in path {
        let ident = syn::Ident::new(s, Span::call_site());
        base.segments.push(syn::PathSegment::from(ident));
    }

    base
}
