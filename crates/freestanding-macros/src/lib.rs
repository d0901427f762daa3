//! Procedural macro entry points for [freestanding].
//!
//! Every macro registered in [freestanding_expand::MacroKind::MANIFEST] has an
//! entry point here which hands its input to the expansion engine. This crate
//! is not intended to be used directly, use the re-exports in [freestanding]
//! instead.
//!
//! [freestanding]: https://docs.rs/freestanding
extern crate proc_macro;

use freestanding_expand::{MacroKind, Options, UnwrapStrategy};
use proc_macro2::Span;
use proc_macro_crate::FoundCrate;

/// The strategy used to emit `unwrap!` bodies, selected at build time.
const UNWRAP_STRATEGY: UnwrapStrategy = if cfg!(feature = "closure-unwrap") {
    UnwrapStrategy::Closure
} else {
    UnwrapStrategy::Inline
};

/// Construct a color from a hexadecimal `0xRRGGBB` integer literal, and an
/// optional leading color space which defaults to `ColorSpace::Srgb`.
///
/// ```
/// use freestanding::{color, Color, ColorSpace};
///
/// assert_eq!(color!(0xFFEEAA), Color::new(ColorSpace::Srgb, 1.0, 0.93, 0.67));
/// assert_eq!(color!(ColorSpace::DisplayP3, 0x336699).color_space(), ColorSpace::DisplayP3);
/// ```
///
/// Anything but an integer literal of exactly six hexadecimal digits is a
/// compile error:
///
/// ```compile_fail
/// let value = 0xFFEEAA;
/// let color = freestanding::color!(value);
/// ```
///
/// ```compile_fail
/// let color = freestanding::color!(0xFFEEA);
/// ```
#[proc_macro]
pub fn color(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(MacroKind::Color, input)
}

/// Unwrap optional values, returning early from the enclosing function if any
/// of them is `None`. Each value is rebound to its unwrapped form for the rest
/// of the scope, and the body runs after every value has been unwrapped.
///
/// The body is either a trailing block after `=>`, or an argument labeled
/// `body` which is a block or a closure taking no arguments. In debug builds a
/// failure to unwrap is reported through
/// `freestanding::report_failed_unwrapping` before returning.
///
/// ```
/// use freestanding::unwrap;
///
/// fn sum(a: Option<u32>, b: Option<u32>, out: &mut Vec<u32>) {
///     unwrap!(a, b => {
///         out.push(a + b);
///     });
/// }
///
/// let mut out = Vec::new();
/// sum(Some(1), Some(2), &mut out);
/// sum(None, Some(2), &mut out);
/// assert_eq!(out, [3]);
/// ```
///
/// Unless the `closure-unwrap` feature is enabled, the body is inlined after
/// the guards, so `return` in the body returns from the enclosing function.
#[proc_macro]
pub fn unwrap(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(MacroKind::Unwrap, input)
}

/// Bind a placeholder to a name which cannot collide with any other name in
/// scope.
///
/// ```
/// fn scope() {
///     freestanding::unique_name!();
///     freestanding::unique_name!();
/// }
///
/// scope();
/// ```
#[proc_macro]
pub fn unique_name(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(MacroKind::UniqueName, input)
}

fn expand(kind: MacroKind, input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let mut options = Options::default().with_unwrap_strategy(UNWRAP_STRATEGY);

    if let Some(module) = runtime_module() {
        options = options.with_module(module);
    }

    freestanding_expand::expand(kind, &options, Span::call_site(), input.into()).into()
}

/// Resolve the path of the runtime crate as seen from the invoking crate,
/// which might have renamed it.
///
/// Returns `None` to use the default `::freestanding`, which is also how the
/// runtime crate refers to itself.
fn runtime_module() -> Option<syn::Path> {
    match proc_macro_crate::crate_name("freestanding").ok()? {
        FoundCrate::Itself => None,
        FoundCrate::Name(name) => {
            let ident = syn::Ident::new(&name, Span::call_site());
            Some(syn::parse_quote!(::#ident))
        }
    }
}
