// File: crates/hoverline-core/src/scale.rs
// Summary: Linear, time (X) and value (Y) scale transforms between data and plot pixels.

use chrono::{DateTime, Utc};

/// Time coordinate in epoch milliseconds.
pub type Millis = f64;
/// Value coordinate (data magnitude).
pub type Value = f64;

/// Shared pixel mapping operations, used by axis tick placement.
pub trait ScaleTransform {
    fn to_px(&self, v: f64) -> f64;
    fn from_px(&self, px: f64) -> f64;
    fn domain(&self) -> (f64, f64);
    fn range(&self) -> (f64, f64);
}

/// Linear interpolation between a domain interval and a pixel range.
/// A zero-width interval maps every input to the midpoint of the output interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn is_degenerate(&self) -> bool {
        self.d0 == self.d1
    }

    #[inline]
    pub fn map(&self, x: f64) -> f64 {
        lerp(self.r0, self.r1, normalize(self.d0, self.d1, x))
    }

    #[inline]
    pub fn invert(&self, y: f64) -> f64 {
        lerp(self.d0, self.d1, normalize(self.r0, self.r1, y))
    }
}

impl ScaleTransform for LinearScale {
    fn to_px(&self, v: f64) -> f64 { self.map(v) }
    fn from_px(&self, px: f64) -> f64 { self.invert(px) }
    fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
}

#[inline]
fn normalize(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span == 0.0 || !span.is_finite() {
        0.5
    } else {
        (x - a) / span
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Horizontal time scale: [first, last] timestamp onto [0, plot width].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(start: Millis, end: Millis, width_px: f64) -> Self {
        Self { linear: LinearScale::new((start, end), (0.0, width_px)) }
    }

    #[inline]
    pub fn map(&self, t: DateTime<Utc>) -> f64 {
        self.linear.map(t.timestamp_millis() as f64)
    }

    #[inline]
    pub fn map_millis(&self, t: Millis) -> f64 {
        self.linear.map(t)
    }

    /// Exact inverse of [`TimeScale::map_millis`].
    #[inline]
    pub fn invert_millis(&self, px: f64) -> Millis {
        self.linear.invert(px)
    }

    /// Inverse mapping rounded to the nearest millisecond.
    pub fn invert(&self, px: f64) -> Option<DateTime<Utc>> {
        let ms = self.invert_millis(px);
        if !ms.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(ms.round() as i64)
    }

    pub fn width(&self) -> f64 {
        self.linear.range().1
    }
}

impl ScaleTransform for TimeScale {
    fn to_px(&self, v: f64) -> f64 { self.linear.map(v) }
    fn from_px(&self, px: f64) -> f64 { self.linear.invert(px) }
    fn domain(&self) -> (f64, f64) { self.linear.domain() }
    fn range(&self) -> (f64, f64) { self.linear.range() }
}

/// Vertical value scale: [0, max value] onto [plot height, 0] so larger values sit higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn new(max_value: Value, height_px: f64) -> Self {
        Self { linear: LinearScale::new((0.0, max_value), (height_px, 0.0)) }
    }

    #[inline]
    pub fn map(&self, v: Value) -> f64 {
        self.linear.map(v)
    }

    #[inline]
    pub fn invert(&self, py: f64) -> Value {
        self.linear.invert(py)
    }

    pub fn height(&self) -> f64 {
        self.linear.range().0
    }
}

impl ScaleTransform for ValueScale {
    fn to_px(&self, v: f64) -> f64 { self.linear.map(v) }
    fn from_px(&self, px: f64) -> f64 { self.linear.invert(px) }
    fn domain(&self) -> (f64, f64) { self.linear.domain() }
    fn range(&self) -> (f64, f64) { self.linear.range() }
}
