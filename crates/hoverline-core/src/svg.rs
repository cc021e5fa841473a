// File: crates/hoverline-core/src/svg.rs
// Summary: Serialize a display list to a standalone SVG document.

use std::fmt::Write as _;

use crate::frame::{Frame, Primitive, TextAnchor};

const FONT_FAMILY: &str = "Inter, Segoe UI, Helvetica, Arial, sans-serif";

pub fn to_svg(frame: &Frame) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>",
        w = frame.width,
        h = frame.height
    );
    for p in &frame.primitives {
        write_primitive(&mut svg, p);
    }
    let _ = writeln!(svg, "</svg>");
    svg
}

fn write_primitive(svg: &mut String, p: &Primitive) {
    match p {
        Primitive::Rect { x, y, width, height, radius, fill } => {
            let _ = writeln!(
                svg,
                "  <rect x='{x:.2}' y='{y:.2}' width='{width:.2}' height='{height:.2}' rx='{radius:.2}' fill='{fill}'/>"
            );
        }
        Primitive::Path { points, stroke, width } => {
            let Some(((x0, y0), rest)) = points.split_first() else { return };
            let mut d = format!("M{x0:.2},{y0:.2}");
            for (x, y) in rest {
                let _ = write!(d, "L{x:.2},{y:.2}");
            }
            let _ = writeln!(
                svg,
                "  <path d='{d}' fill='none' stroke='{stroke}' stroke-width='{width}' stroke-linejoin='round' stroke-linecap='round'/>"
            );
        }
        Primitive::Line { x1, y1, x2, y2, stroke, width, dash } => {
            let dash = dash
                .map(|(on, off)| format!(" stroke-dasharray='{on} {off}'"))
                .unwrap_or_default();
            let _ = writeln!(
                svg,
                "  <line x1='{x1:.2}' y1='{y1:.2}' x2='{x2:.2}' y2='{y2:.2}' stroke='{stroke}' stroke-width='{width}'{dash}/>"
            );
        }
        Primitive::Circle { cx, cy, r, fill, stroke, stroke_width } => {
            let _ = writeln!(
                svg,
                "  <circle cx='{cx:.2}' cy='{cy:.2}' r='{r}' fill='{fill}' stroke='{stroke}' stroke-width='{stroke_width}'/>"
            );
        }
        Primitive::Text { x, y, text, size, color, anchor } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let _ = writeln!(
                svg,
                "  <text x='{x:.2}' y='{y:.2}' fill='{color}' font-family='{FONT_FAMILY}' font-size='{size}' text-anchor='{anchor}'>{}</text>",
                escape_text(text)
            );
        }
    }
}

fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
