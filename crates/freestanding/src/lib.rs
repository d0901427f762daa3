//! Freestanding macros which stand in for expressions and statements.
//!
//! * [color!] constructs a [Color] from a hexadecimal `0xRRGGBB` literal,
//!   validated at compile time.
//! * [unwrap!] unwraps a number of optional values and runs a body with the
//!   unwrapped values, returning early if any of them is `None`.
//! * [unique_name!] binds a placeholder to a name which is unique to the
//!   expansion.
//!
//! ```
//! use freestanding::{color, unwrap, Color, ColorSpace};
//!
//! fn tint(base: Option<Color>, alpha: Option<f64>, out: &mut Vec<(Color, f64)>) {
//!     unwrap!(base, alpha => {
//!         out.push((base, alpha));
//!     });
//! }
//!
//! let mut out = Vec::new();
//! tint(Some(color!(0x336699)), Some(0.5), &mut out);
//! tint(Some(color!(ColorSpace::DisplayP3, 0xFFFFFF)), None, &mut out);
//!
//! assert_eq!(out, [(Color::new(ColorSpace::Srgb, 0.2, 0.4, 0.6), 0.5)]);
//! ```

#![deny(missing_docs)]

#[allow(unused_extern_crates)]
extern crate self as freestanding;

mod color;
mod report;

pub use self::color::{Color, ColorSpace};
pub use self::report::report_failed_unwrapping;

pub use freestanding_macros::{color, unique_name, unwrap};

#[cfg(test)]
mod tests {
    use crate::{Color, ColorSpace};

    static_assertions::assert_impl_all!(Color: Send, Sync, Copy);
    static_assertions::assert_impl_all!(ColorSpace: Send, Sync, Copy, Default);

    #[test]
    fn default_color_space() {
        assert_eq!(ColorSpace::default(), ColorSpace::Srgb);
    }

    #[test]
    fn display() {
        let color = Color::new(ColorSpace::DisplayP3, 1.0, 0.5, 0.0);
        assert_eq!(color.to_string(), "Display P3(1, 0.5, 0)");
    }

    #[test]
    fn accessors() {
        let color = Color::new(ColorSpace::SrgbLinear, 0.2, 0.4, 0.6);
        assert_eq!(color.color_space(), ColorSpace::SrgbLinear);
        assert_eq!(color.red(), 0.2);
        assert_eq!(color.green(), 0.4);
        assert_eq!(color.blue(), 0.6);
    }
}
