use quote::quote;

use crate::{render, MacroContext, MacroKind, Options, Position};

#[test]
fn manifest() {
    let names = MacroKind::MANIFEST
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>();

    assert_eq!(names, ["color", "unwrap", "unique_name"]);

    for &kind in MacroKind::MANIFEST {
        assert_eq!(MacroKind::from_name(kind.name()), Some(kind));
    }

    assert_eq!(MacroKind::from_name("Color"), None);
    assert_eq!(MacroKind::Color.position(), Position::Expression);
    assert_eq!(MacroKind::Unwrap.position(), Position::Declaration);
    assert_eq!(MacroKind::UniqueName.position(), Position::Declaration);
}

fn render_test(kind: MacroKind, input: proc_macro2::TokenStream) -> String {
    MacroContext::test(|cx| render(kind, &Options::default(), cx, input).to_string())
}

#[test]
fn renders_expansion() {
    let output = render_test(MacroKind::Color, quote!(0xFFEEAA));
    let expected = quote!(::freestanding::Color::new(::freestanding::ColorSpace::Srgb, 1.0, 0.93, 0.67));
    assert_eq!(output, expected.to_string());
}

#[test]
fn renders_diagnostics_as_compile_errors() {
    let output = render_test(MacroKind::Color, quote!(value));
    assert!(output.contains("compile_error"), "{output}");
    assert!(output.contains("color! requires an integer literal"), "{output}");
    assert!(!output.contains("Color :: new"), "{output}");
}

#[test]
fn renders_errors_as_statements() {
    let output = render_test(MacroKind::Unwrap, quote!(a, b));
    assert!(output.contains("compile_error"), "{output}");
    assert!(output.ends_with(';'), "{output}");
    assert!(!output.contains("report_failed_unwrapping"), "{output}");
}

#[test]
fn renders_parse_errors() {
    let output = render_test(MacroKind::Unwrap, quote!(a b));
    assert!(output.contains("compile_error"), "{output}");
}

#[test]
fn expand_defers_location() {
    let output = crate::expand(
        MacroKind::Unwrap,
        &Options::default(),
        proc_macro2::Span::call_site(),
        quote!(a => {}),
    )
    .to_string();

    assert!(output.contains("file !"), "{output}");
    assert!(output.contains("line !"), "{output}");
}
