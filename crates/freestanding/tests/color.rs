use freestanding::{color, Color, ColorSpace};

const ACCENT: Color = color!(0x336699);

#[test]
fn default_color_space() {
    assert_eq!(color!(0xFFEEAA), Color::new(ColorSpace::Srgb, 1.0, 0.93, 0.67));
    assert_eq!(color!(0xffeeaa), color!(0xFFEEAA));
}

#[test]
fn explicit_color_space() {
    let color = color!(ColorSpace::DisplayP3, 0x000000);
    assert_eq!(color, Color::new(ColorSpace::DisplayP3, 0.0, 0.0, 0.0));
}

#[test]
fn constant() {
    assert_eq!(ACCENT.color_space(), ColorSpace::Srgb);
    assert_eq!(ACCENT.red(), 0.2);
    assert_eq!(ACCENT.green(), 0.4);
    assert_eq!(ACCENT.blue(), 0.6);
}

#[test]
fn channels_are_rounded() {
    let color = color!(0x010203);
    assert_eq!(color.red(), 0.0);
    assert_eq!(color.green(), 0.01);
    assert_eq!(color.blue(), 0.01);
}
