use quote::{quote, ToTokens};

use crate::tests::invocation;
use crate::Invocation;

fn labels(invocation: &Invocation) -> Vec<Option<String>> {
    invocation
        .iter()
        .map(|argument| argument.label().map(ToString::to_string))
        .collect()
}

#[test]
fn positional_and_labeled() {
    let invocation = invocation(quote!(a, b, body: || {}));
    assert_eq!(invocation.len(), 3);
    assert_eq!(labels(&invocation), [None, None, Some("body".to_owned())]);
    assert!(invocation.trailing_block().is_none());
}

#[test]
fn paths_are_not_labels() {
    let invocation = invocation(quote!(ColorSpace::DisplayP3, 0xFFEEAA));
    assert_eq!(labels(&invocation), [None, None]);

    let expected: syn::Expr = syn::parse_quote!(ColorSpace::DisplayP3);
    assert_eq!(invocation.arguments[0].expr, expected);
}

#[test]
fn trailing_block() {
    let invocation = invocation(quote!(a, b => { work(); }));
    assert_eq!(invocation.len(), 2);

    let expected: syn::Block = syn::parse_quote!({ work(); });
    assert_eq!(invocation.trailing_block(), Some(&expected));
}

#[test]
fn trailing_comma() {
    let invocation = invocation(quote!(a, b, => {}));
    assert_eq!(invocation.len(), 2);
    assert!(invocation.trailing_block().is_some());
}

#[test]
fn empty() {
    let invocation = invocation(quote!());
    assert!(invocation.is_empty());
    assert!(invocation.trailing_block().is_none());
}

#[test]
fn round_trips_tokens() {
    let input = quote!(a, body: { work(); }, c => { more(); });
    let invocation = invocation(input.clone());
    assert_eq!(invocation.to_token_stream().to_string(), input.to_string());
}

#[test]
fn unexpected_input() {
    assert!(syn::parse2::<Invocation>(quote!(a b)).is_err());
    assert!(syn::parse2::<Invocation>(quote!(a => {} b)).is_err());
}
