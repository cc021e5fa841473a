// File: crates/hoverline-core/src/view.rs
// Layout-derived view state: plot area, both scales and both axes for one container size.
// Rebuilt from scratch whenever the container is resized.

use tracing::debug;

use crate::axis::{Axis, AxisKind};
use crate::geometry::PlotArea;
use crate::scale::{TimeScale, ValueScale};
use crate::series::Series;
use crate::types::Insets;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub width: u32,
    pub height: u32,
    pub plot: PlotArea,
    pub time: TimeScale,
    pub value: ValueScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl ChartView {
    pub fn new(series: &Series, width: u32, height: u32, insets: &Insets, x_ticks: usize, y_ticks: usize) -> Self {
        let plot = PlotArea::from_container(width, height, insets);
        let (t0, t1) = series.time_extent().unwrap_or((0.0, 0.0));
        let v_max = series.max_value().unwrap_or(0.0);
        let time = TimeScale::new(t0, t1, plot.width);
        let value = ValueScale::new(v_max, plot.height);

        let (x_axis, y_axis) = if series.is_empty() {
            (Axis::empty(AxisKind::Time), Axis::empty(AxisKind::Linear))
        } else {
            (Axis::time(&time, x_ticks), Axis::value(&value, y_ticks))
        };

        debug!(
            width,
            height,
            points = series.len(),
            time_domain = ?(t0, t1),
            value_max = v_max,
            "recomputed chart view"
        );

        Self { width, height, plot, time, value, x_axis, y_axis }
    }

    /// Forward-map every point to plot-local pixels.
    pub fn project(&self, series: &Series) -> Vec<(f64, f64)> {
        series
            .iter()
            .map(|p| (self.time.map(p.timestamp), self.value.map(p.value)))
            .collect()
    }
}
