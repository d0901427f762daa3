//! Expansion engine for freestanding macros.
//!
//! This crate implements the expanders behind the macros exported by
//! [freestanding](https://docs.rs/freestanding):
//!
//! * `color!(0xRRGGBB)` and `color!(space, 0xRRGGBB)` expand into a color
//!   constructor call after validating the hexadecimal literal.
//! * `unwrap!(a, b => { .. })` expands into one guard per optional value
//!   followed by the body, which runs with every value unwrapped.
//! * `unique_name!()` binds a placeholder to a name which is unique to the
//!   expansion.
//!
//! Expanders operate on `proc-macro2` token streams, so they can be driven
//! and tested outside of a procedural macro.
//!
//! ```
//! use freestanding_expand::{MacroContext, MacroKind, Options};
//! use quote::quote;
//!
//! let output = MacroContext::test(|cx| {
//!     freestanding_expand::render(MacroKind::Color, &Options::default(), cx, quote!(0xFFEEAA))
//! });
//!
//! assert!(output.to_string().contains("0.93"));
//! ```

#![deny(missing_docs)]

mod color;
mod context;
pub mod diagnostics;
mod internals;
pub mod invocation;
pub mod literal;
mod options;
mod registry;
mod unique_name;
mod unwrap;


pub use self::context::{MacroContext, SourceLocation};
pub use self::diagnostics::{Diagnostic, DiagnosticKind};
pub use self::invocation::{Argument, Invocation};
pub use self::options::{ConfigurationError, Options, UnwrapStrategy};
pub use self::registry::{expand, render, Expander, Expansion, MacroKind, Position};
