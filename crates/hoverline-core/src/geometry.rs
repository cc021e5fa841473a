// File: crates/hoverline-core/src/geometry.rs
// Summary: Plot-area rectangle and pixel math helpers.

use crate::types::Insets;

/// Plot rectangle in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Carve the plot area out of a container; shrinks to zero rather than going negative.
    pub fn from_container(width: u32, height: u32, insets: &Insets) -> Self {
        Self {
            left: insets.left as f64,
            top: insets.top as f64,
            width: width.saturating_sub(insets.hsum()) as f64,
            height: height.saturating_sub(insets.vsum()) as f64,
        }
    }

    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn bottom(&self) -> f64 { self.top + self.height }

    /// Whether a container-space point lies inside the plot area (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// Convert container coordinates to plot-local coordinates.
    pub fn to_local(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.left, y - self.top)
    }

    /// Convert plot-local coordinates back to container coordinates.
    pub fn to_container(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.left, y + self.top)
    }
}
