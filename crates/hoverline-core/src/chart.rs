// File: crates/hoverline-core/src/chart.rs
// Summary: LineChart coordinator: owns the series, layout, visibility and hover state,
// reacts to pointer/resize events and renders the display list to SVG (or PNG).

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::downsample::lttb;
use crate::frame::{Frame, Primitive, TextAnchor};
use crate::locate::{locate_px, Located};
use crate::series::Series;
use crate::theme::Theme;
use crate::tooltip::{self, Tooltip, TooltipStyle};
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ChartView;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub line_width: f64,
    pub corner_radius: f64,
    pub tick_length: f64,
    pub label_size: f64,
    pub marker_radius: f64,
    /// Thin the drawn path with LTTB above this many points. Hit-testing is unaffected.
    pub max_path_points: Option<usize>,
    pub tooltip: TooltipStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            x_ticks: 10,
            y_ticks: 10,
            line_width: 1.0,
            corner_radius: 14.0,
            tick_length: 8.0,
            label_size: 11.0,
            marker_radius: 5.0,
            max_path_points: None,
            tooltip: TooltipStyle::default(),
        }
    }
}

/// Outcome of a pointer event on the hover state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    Unchanged,
    Moved,
    Cleared,
}

/// Currently highlighted point and its placed tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct Hover {
    pub located: Located,
    pub tooltip: Tooltip,
}

pub struct LineChart {
    series: Series,
    options: RenderOptions,
    view: ChartView,
    visible: bool,
    hover: Option<Hover>,
}

impl LineChart {
    pub fn new(series: Series, options: RenderOptions) -> Self {
        let view = ChartView::new(&series, options.width, options.height, &options.insets, options.x_ticks, options.y_ticks);
        Self { series, options, view, visible: true, hover: None }
    }

    pub fn series(&self) -> &Series { &self.series }
    pub fn options(&self) -> &RenderOptions { &self.options }
    pub fn view(&self) -> &ChartView { &self.view }
    pub fn is_visible(&self) -> bool { self.visible }
    pub fn hover(&self) -> Option<&Hover> { self.hover.as_ref() }

    /// Container resized: recompute layout and scales; keep the hovered point, re-placed.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.options.width = width;
        self.options.height = height;
        self.view = ChartView::new(&self.series, width, height, &self.options.insets, self.options.x_ticks, self.options.y_ticks);
        if let Some(prev) = self.hover.take() {
            self.hover = self.hover_at(prev.located.index);
        }
    }

    /// Hiding suppresses the path and the tooltip; data and scales are untouched.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if !visible {
            self.hover = None;
        }
        debug!(visible, "line visibility changed");
    }

    pub fn toggle_visible(&mut self) -> bool {
        self.set_visible(!self.visible);
        self.visible
    }

    /// Pointer moved to container-local `pos`; `None` when coordinates could not be resolved.
    pub fn pointer_move(&mut self, pos: Option<(f64, f64)>) -> HoverChange {
        let Some((x, y)) = pos else {
            trace!("pointer event without local coordinates");
            return HoverChange::Unchanged;
        };
        if !self.visible || self.series.is_empty() {
            return HoverChange::Unchanged;
        }
        if !self.view.plot.contains(x, y) {
            return self.pointer_leave();
        }
        let (local_x, _) = self.view.plot.to_local(x, y);
        let Some(located) = locate_px(&self.series, &self.view.time, &self.view.value, local_x) else {
            return HoverChange::Unchanged;
        };
        if self
            .hover
            .as_ref()
            .is_some_and(|h| h.located.point.timestamp == located.point.timestamp)
        {
            return HoverChange::Unchanged;
        }
        trace!(index = located.index, timestamp = %located.point.timestamp, value = located.point.value, "hover moved");
        self.hover = Some(self.build_hover(located));
        HoverChange::Moved
    }

    pub fn pointer_leave(&mut self) -> HoverChange {
        if self.hover.take().is_some() {
            trace!("hover cleared");
            HoverChange::Cleared
        } else {
            HoverChange::Unchanged
        }
    }

    fn hover_at(&self, index: usize) -> Option<Hover> {
        let point = *self.series.get(index)?;
        let located = Located {
            index,
            point,
            x: self.view.time.map(point.timestamp),
            y: self.view.value.map(point.value),
        };
        Some(self.build_hover(located))
    }

    fn build_hover(&self, located: Located) -> Hover {
        let anchor = self.view.plot.to_container(located.x, located.y);
        let container = (self.view.width as f64, self.view.height as f64);
        let tooltip = tooltip::place(anchor, tooltip::tooltip_lines(&located.point), container, &self.options.tooltip);
        Hover { located, tooltip }
    }

    /// Build the display list for the current state.
    pub fn frame(&self) -> Frame {
        let opts = &self.options;
        let theme = &opts.theme;
        let plot = self.view.plot;
        let mut frame = Frame::new(self.view.width, self.view.height);

        frame.push(Primitive::Rect {
            x: 0.0,
            y: 0.0,
            width: self.view.width as f64,
            height: self.view.height as f64,
            radius: opts.corner_radius,
            fill: theme.background,
        });

        if self.visible && !self.series.is_empty() {
            let mut points = self.view.project(&self.series);
            if let Some(max) = opts.max_path_points {
                if points.len() > max {
                    points = lttb(&points, max);
                }
            }
            let points = points.into_iter().map(|(x, y)| plot.to_container(x, y)).collect();
            frame.push(Primitive::Path { points, stroke: theme.line_stroke, width: opts.line_width });
        }

        if let Some(hover) = &self.hover {
            let (cx, cy) = plot.to_container(hover.located.x, hover.located.y);
            frame.push(Primitive::Line {
                x1: cx,
                y1: plot.top,
                x2: cx,
                y2: plot.bottom(),
                stroke: theme.guide,
                width: 1.0,
                dash: Some((4.0, 4.0)),
            });
            frame.push(Primitive::Circle {
                cx,
                cy,
                r: opts.marker_radius,
                fill: theme.marker_fill,
                stroke: theme.marker_stroke,
                stroke_width: 2.0,
            });
        }

        self.push_axes(&mut frame);

        if let Some(hover) = &self.hover {
            push_tooltip(&mut frame, &hover.tooltip, &opts.tooltip, theme);
        }
        frame
    }

    fn push_axes(&self, frame: &mut Frame) {
        let opts = &self.options;
        let theme = &opts.theme;
        let plot = self.view.plot;

        frame.push(Primitive::Line {
            x1: plot.left,
            y1: plot.bottom(),
            x2: plot.right(),
            y2: plot.bottom(),
            stroke: theme.axis_line,
            width: 1.0,
            dash: None,
        });
        for tick in &self.view.x_axis.ticks {
            let x = plot.left + tick.offset;
            frame.push(Primitive::Line {
                x1: x,
                y1: plot.bottom(),
                x2: x,
                y2: plot.bottom() + opts.tick_length,
                stroke: theme.tick,
                width: 1.0,
                dash: None,
            });
            if opts.draw_labels {
                frame.push(Primitive::Text {
                    x,
                    y: plot.bottom() + opts.tick_length + opts.label_size,
                    text: tick.label.clone(),
                    size: opts.label_size,
                    color: theme.axis_label,
                    anchor: TextAnchor::Middle,
                });
            }
        }

        frame.push(Primitive::Line {
            x1: plot.left,
            y1: plot.top,
            x2: plot.left,
            y2: plot.bottom(),
            stroke: theme.axis_line,
            width: 1.0,
            dash: None,
        });
        for tick in &self.view.y_axis.ticks {
            let y = plot.top + tick.offset;
            frame.push(Primitive::Line {
                x1: plot.left - opts.tick_length,
                y1: y,
                x2: plot.left,
                y2: y,
                stroke: theme.tick,
                width: 1.0,
                dash: None,
            });
            if opts.draw_labels {
                frame.push(Primitive::Text {
                    x: plot.left - opts.tick_length - opts.label_size * 0.5,
                    y: y + opts.label_size * 0.25,
                    text: tick.label.clone(),
                    size: opts.label_size,
                    color: theme.axis_label,
                    anchor: TextAnchor::End,
                });
            }
        }
    }

    pub fn render_svg(&self) -> String {
        crate::svg::to_svg(&self.frame())
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(&self, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_svg_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, self.render_svg()).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Rasterize the chart to PNG bytes using a CPU Skia surface.
    #[cfg(feature = "png")]
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        crate::raster::to_png(&self.frame())
    }

    /// Render the chart to a PNG at `output_png_path`.
    #[cfg(feature = "png")]
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

fn push_tooltip(frame: &mut Frame, tip: &Tooltip, style: &TooltipStyle, theme: &Theme) {
    frame.push(Primitive::Rect {
        x: tip.left,
        y: tip.top,
        width: tip.width,
        height: tip.height,
        radius: style.corner_radius,
        fill: theme.tooltip_background,
    });
    for (i, line) in tip.lines.iter().enumerate() {
        frame.push(Primitive::Text {
            x: tip.left + style.padding_x,
            y: tip.top + style.padding_y + i as f64 * style.line_height + style.font_size,
            text: line.clone(),
            size: style.font_size,
            color: theme.tooltip_text,
            anchor: TextAnchor::Start,
        });
    }
}
