// File: crates/hoverline-core/src/frame.rs
// Summary: Backend-neutral display list produced by one render pass.
// All coordinates are container pixels.

use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect { x: f64, y: f64, width: f64, height: f64, radius: f64, fill: Color },
    Path { points: Vec<(f64, f64)>, stroke: Color, width: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, stroke: Color, width: f64, dash: Option<(f64, f64)> },
    Circle { cx: f64, cy: f64, r: f64, fill: Color, stroke: Color, stroke_width: f64 },
    Text { x: f64, y: f64, text: String, size: f64, color: Color, anchor: TextAnchor },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub primitives: Vec<Primitive>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, primitives: Vec::new() }
    }

    pub fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }

    pub fn paths(&self) -> impl Iterator<Item = &Vec<(f64, f64)>> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Path { points, .. } => Some(points),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle { cx, cy, .. } => Some((*cx, *cy)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
