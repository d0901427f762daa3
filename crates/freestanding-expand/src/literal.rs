//! Validation of hexadecimal color literals.

use once_cell::sync::Lazy;
use regex::Regex;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9A-Fa-f]{6}$").expect("hex color pattern is valid"));

/// Normalized color channels, each in the range `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// The red channel.
    pub red: f64,
    /// The green channel.
    pub green: f64,
    /// The blue channel.
    pub blue: f64,
}

/// Validate the source text of an integer literal as a `0xRRGGBB` color.
///
/// Returns `None` for anything but `0x` followed by exactly six hexadecimal
/// digits. Channels are not rounded.
///
/// # Examples
///
/// ```
/// use freestanding_expand::literal;
///
/// let rgb = literal::validate("0xFF0000").unwrap();
/// assert_eq!(rgb.red, 1.0);
/// assert_eq!(rgb.green, 0.0);
///
/// assert!(literal::validate("0xFF00").is_none());
/// assert!(literal::validate("FF0000").is_none());
/// ```
pub fn validate(text: &str) -> Option<Rgb> {
    if !HEX_COLOR.is_match(text) {
        return None;
    }

    let number = u32::from_str_radix(&text[2..], 16).ok()?;

    Some(Rgb {
        red: f64::from((number & 0xFF0000) >> 16) / 255.0,
        green: f64::from((number & 0x00FF00) >> 8) / 255.0,
        blue: f64::from(number & 0x0000FF) / 255.0,
    })
}

/// Round a channel to at most two fractional digits.
pub fn round_channel(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a channel with at most two fractional digits and no trailing
/// zeros, independently of locale.
///
/// # Examples
///
/// ```
/// use freestanding_expand::literal::format_channel;
///
/// assert_eq!(format_channel(1.0), "1");
/// assert_eq!(format_channel(238.0 / 255.0), "0.93");
/// assert_eq!(format_channel(170.0 / 255.0), "0.67");
/// ```
pub fn format_channel(value: f64) -> String {
    round_channel(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for &number in &[0x000000u32, 0xFFFFFF, 0xFFEEAA, 0x123456, 0xABCDEF, 0x0F0F0F] {
            for text in [format!("0x{number:06X}"), format!("0x{number:06x}")] {
                let rgb = validate(&text).expect("valid literal");

                let red = (rgb.red * 255.0).round() as u32;
                let green = (rgb.green * 255.0).round() as u32;
                let blue = (rgb.blue * 255.0).round() as u32;

                assert_eq!(red << 16 | green << 8 | blue, number, "{text}");
                assert_eq!(red + green * 256 + blue * 65536, number.swap_bytes() >> 8);
            }
        }
    }

    #[test]
    fn channels_in_range() {
        let rgb = validate("0xFF8000").expect("valid literal");
        assert_eq!(rgb.red, 1.0);
        assert!(rgb.green > 0.5 && rgb.green < 0.51);
        assert_eq!(rgb.blue, 0.0);
    }

    #[test]
    fn rejects_malformed() {
        for text in [
            "",
            "0x",
            "0xFFEEA",
            "0xFFEEAA0",
            "0XFFEEAA",
            "FFEEAA",
            "-0xFFEEAA",
            "0xFFEEAG",
            "0xFFEEAAu32",
            "0b101010",
            "16772778",
            " 0xFFEEAA",
        ] {
            assert!(validate(text).is_none(), "{text:?} should not validate");
        }
    }

    #[test]
    fn formatting() {
        assert_eq!(format_channel(0.0), "0");
        assert_eq!(format_channel(1.0), "1");
        assert_eq!(format_channel(0.5), "0.5");
        assert_eq!(format_channel(51.0 / 255.0), "0.2");
        assert_eq!(format_channel(238.0 / 255.0), "0.93");
        assert_eq!(format_channel(170.0 / 255.0), "0.67");
        assert_eq!(format_channel(1.0 / 255.0), "0");
        assert_eq!(round_channel(170.0 / 255.0), 0.67);
    }
}
