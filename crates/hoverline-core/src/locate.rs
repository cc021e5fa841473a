// File: crates/hoverline-core/src/locate.rs
// Summary: Nearest-point lookup by timestamp for pointer tracking.
// Tie-break: when two timestamps are equally close the earlier one wins, and a duplicated
// winning timestamp resolves to its first occurrence. Both search variants agree on this.

use crate::scale::{Millis, TimeScale, ValueScale};
use crate::series::{DataPoint, Series};

/// A located data point together with its plot-local pixel position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Located {
    pub index: usize,
    pub point: DataPoint,
    pub x: f64,
    pub y: f64,
}

/// Bisecting search over points sorted ascending by timestamp. O(log n).
pub fn nearest_index(points: &[DataPoint], target: Millis) -> Option<usize> {
    if points.is_empty() || !target.is_finite() {
        return None;
    }
    let i = points.partition_point(|p| p.millis() < target);
    let candidate = if i == 0 {
        0
    } else if i == points.len() {
        points.len() - 1
    } else {
        let before = target - points[i - 1].millis();
        let after = points[i].millis() - target;
        if after < before { i } else { i - 1 }
    };
    let ts = points[candidate].millis();
    Some(points[..=candidate].partition_point(|p| p.millis() < ts))
}

/// Linear scan; correct for any ordering. O(n).
pub fn nearest_index_linear(points: &[DataPoint], target: Millis) -> Option<usize> {
    if !target.is_finite() {
        return None;
    }
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let dist = (p.millis() - target).abs();
        match best {
            Some((_, current)) if current <= dist => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i)
}

/// Find the point nearest to `target` and forward-map it through both scales.
pub fn locate(series: &Series, time: &TimeScale, value: &ValueScale, target: Millis) -> Option<Located> {
    let index = nearest_index(series.points(), target)?;
    let point = *series.get(index)?;
    Some(Located {
        index,
        point,
        x: time.map(point.timestamp),
        y: value.map(point.value),
    })
}

/// Same as [`locate`], starting from a plot-local x pixel.
pub fn locate_px(series: &Series, time: &TimeScale, value: &ValueScale, x_px: f64) -> Option<Located> {
    locate(series, time, value, time.invert_millis(x_px))
}
