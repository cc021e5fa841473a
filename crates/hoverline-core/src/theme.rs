// File: crates/hoverline-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use std::fmt;

/// 8-bit ARGB color, independent of any rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
}

/// CSS notation: `#rrggbb` when opaque, `rgba(..)` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f64 / 255.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub guide: Color,
    pub line_stroke: Color,
    pub marker_fill: Color,
    pub marker_stroke: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(0xf3, 0xf3, 0xf3),
            axis_line: Color::from_rgb(0x6b, 0x72, 0x80),
            axis_label: Color::from_rgb(0x6b, 0x72, 0x80),
            tick: Color::from_rgb(0x6b, 0x72, 0x80),
            guide: Color::from_rgb(0xcc, 0x00, 0x00),
            line_stroke: Color::from_rgb(0x63, 0x66, 0xf1),
            marker_fill: Color::from_rgb(0x63, 0x66, 0xf1),
            marker_stroke: Color::WHITE,
            tooltip_background: Color::from_rgb(0x11, 0x18, 0x27),
            tooltip_text: Color::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            axis_line: Color::from_rgb(180, 180, 190),
            axis_label: Color::from_rgb(235, 235, 245),
            tick: Color::from_rgb(150, 150, 160),
            guide: Color::from_rgb(255, 230, 70),
            line_stroke: Color::from_rgb(64, 160, 255),
            marker_fill: Color::from_rgb(64, 160, 255),
            marker_stroke: Color::from_rgb(18, 18, 20),
            tooltip_background: Color::from_rgb(235, 235, 245),
            tooltip_text: Color::from_rgb(18, 18, 20),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
