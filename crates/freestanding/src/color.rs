use std::fmt;

/// The color space of a [Color].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ColorSpace {
    /// The sRGB color space.
    #[default]
    Srgb,
    /// The sRGB color space with a linear transfer function.
    SrgbLinear,
    /// The Display P3 color space.
    DisplayP3,
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpace::Srgb => f.write_str("sRGB"),
            ColorSpace::SrgbLinear => f.write_str("linear sRGB"),
            ColorSpace::DisplayP3 => f.write_str("Display P3"),
        }
    }
}

/// A color with red, green and blue channels in the range `0.0..=1.0`.
///
/// Usually constructed through the [color!][crate::color!] macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    color_space: ColorSpace,
    red: f64,
    green: f64,
    blue: f64,
}

impl Color {
    /// Construct a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use freestanding::{Color, ColorSpace};
    ///
    /// let color = Color::new(ColorSpace::Srgb, 1.0, 0.5, 0.0);
    /// assert_eq!(color.green(), 0.5);
    /// ```
    pub const fn new(color_space: ColorSpace, red: f64, green: f64, blue: f64) -> Self {
        Self {
            color_space,
            red,
            green,
            blue,
        }
    }

    /// The color space of the color.
    pub const fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// The red channel.
    pub const fn red(&self) -> f64 {
        self.red
    }

    /// The green channel.
    pub const fn green(&self) -> f64 {
        self.green
    }

    /// The blue channel.
    pub const fn blue(&self) -> f64 {
        self.blue
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            self.color_space, self.red, self.green, self.blue
        )
    }
}
