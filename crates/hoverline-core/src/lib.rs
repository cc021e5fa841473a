// File: crates/hoverline-core/src/lib.rs
// Summary: Core library entry point; exports the scales, nearest-point locator, chart
// coordinator and SVG/PNG output.

pub mod error;
pub mod types;
pub mod geometry;
pub mod series;
pub mod scale;
pub mod locate;
pub mod axis;
pub mod view;
pub mod theme;
pub mod tooltip;
pub mod downsample;
pub mod frame;
pub mod svg;
pub mod chart;
#[cfg(feature = "png")]
pub mod raster;

pub use error::{ChartError, ChartResult};
pub use series::{DataPoint, Series};
pub use scale::{LinearScale, ScaleTransform, TimeScale, ValueScale};
pub use locate::{locate, nearest_index, nearest_index_linear, Located};
pub use axis::{Axis, AxisKind, Tick};
pub use view::ChartView;
pub use theme::{Color, Theme};
pub use tooltip::{Tooltip, TooltipStyle};
pub use frame::{Frame, Primitive};
pub use chart::{Hover, HoverChange, LineChart, RenderOptions};
pub use downsample::lttb;
