// File: crates/hoverline-core/src/tooltip.rs
// Summary: Tooltip contents and bounded placement next to the hovered point.

use crate::series::DataPoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipStyle {
    pub offset: f64,
    pub font_size: f64,
    pub line_height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    pub corner_radius: f64,
    pub max_width: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            offset: 10.0,
            font_size: 12.0,
            line_height: 16.0,
            padding_x: 12.0,
            padding_y: 8.0,
            corner_radius: 6.0,
            max_width: 200.0,
        }
    }
}

/// Placed tooltip panel in container coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub lines: Vec<String>,
}

pub fn tooltip_lines(point: &DataPoint) -> Vec<String> {
    vec![
        format!("Timestamp: {}", point.timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p")),
        format!("Value: {}", point.value),
    ]
}

/// Place a panel beside `anchor`, flipping to the other side of the anchor on any
/// axis where it would overflow the container.
pub fn place(anchor: (f64, f64), lines: Vec<String>, container: (f64, f64), style: &TooltipStyle) -> Tooltip {
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
    // average glyph advance of a proportional sans face is ~0.6em
    let width = (longest * style.font_size * 0.6 + 2.0 * style.padding_x).min(style.max_width);
    let height = lines.len() as f64 * style.line_height + 2.0 * style.padding_y;

    let (ax, ay) = anchor;
    let (cw, ch) = container;
    let mut left = ax + style.offset;
    if left + width > cw {
        left = ax - style.offset - width;
    }
    let mut top = ay + style.offset;
    if top + height > ch {
        top = ay - style.offset - height;
    }

    Tooltip { left: left.max(0.0), top: top.max(0.0), width, height, lines }
}
