// File: crates/hoverline-core/tests/interaction.rs
// Purpose: Pointer, visibility and resize handling of the LineChart coordinator.

use hoverline_core::{DataPoint, HoverChange, LineChart, RenderOptions, Series};

// Default insets are left 60, right 20, top 20, bottom 50, so this gives a 100x100 plot.
fn chart() -> LineChart {
    let data: Vec<DataPoint> = [(0, 10.0), (10, 20.0), (20, 15.0)]
        .iter()
        .map(|&(t, v)| DataPoint::from_millis(t, v).unwrap())
        .collect();
    let opts = RenderOptions { width: 180, height: 170, ..RenderOptions::default() };
    LineChart::new(Series::new(&data).unwrap(), opts)
}

#[test]
fn hover_tracks_nearest_point() {
    let mut c = chart();
    assert_eq!(c.pointer_move(Some((110.0, 70.0))), HoverChange::Moved);
    let hover = c.hover().expect("hovering");
    assert_eq!(hover.located.index, 1);
    assert_eq!(hover.located.point.value, 20.0);
    assert_eq!((hover.located.x, hover.located.y), (50.0, 0.0));

    let frame = c.frame();
    assert_eq!(frame.circles().collect::<Vec<_>>(), vec![(110.0, 20.0)]);
    assert!(frame.texts().any(|t| t == "Value: 20"));
}

#[test]
fn same_point_does_not_update() {
    let mut c = chart();
    assert_eq!(c.pointer_move(Some((110.0, 70.0))), HoverChange::Moved);
    // pixel 26 in the plot still resolves to the t=10 point
    assert_eq!(c.pointer_move(Some((86.0, 40.0))), HoverChange::Unchanged);
    assert_eq!(c.pointer_move(Some((61.0, 40.0))), HoverChange::Moved);
    assert_eq!(c.hover().unwrap().located.index, 0);
}

#[test]
fn unresolvable_pointer_is_ignored() {
    let mut c = chart();
    c.pointer_move(Some((110.0, 70.0)));
    assert_eq!(c.pointer_move(None), HoverChange::Unchanged);
    assert!(c.hover().is_some());
}

#[test]
fn leaving_clears_hover() {
    let mut c = chart();
    assert_eq!(c.pointer_leave(), HoverChange::Unchanged);
    c.pointer_move(Some((110.0, 70.0)));
    assert_eq!(c.pointer_leave(), HoverChange::Cleared);
    assert!(c.hover().is_none());
    assert_eq!(c.frame().circles().count(), 0);
}

#[test]
fn pointer_outside_plot_behaves_like_leave() {
    let mut c = chart();
    c.pointer_move(Some((110.0, 70.0)));
    assert_eq!(c.pointer_move(Some((10.0, 10.0))), HoverChange::Cleared);
    assert_eq!(c.pointer_move(Some((170.0, 160.0))), HoverChange::Unchanged);
}

#[test]
fn re_entering_same_point_shows_tooltip_again() {
    let mut c = chart();
    c.pointer_move(Some((110.0, 70.0)));
    c.pointer_leave();
    assert_eq!(c.pointer_move(Some((110.0, 70.0))), HoverChange::Moved);
}

#[test]
fn hidden_chart_suppresses_path_and_tooltip() {
    let mut c = chart();
    c.pointer_move(Some((110.0, 70.0)));
    assert!(!c.toggle_visible());
    assert!(c.hover().is_none());
    assert_eq!(c.pointer_move(Some((61.0, 70.0))), HoverChange::Unchanged);

    let frame = c.frame();
    assert_eq!(frame.paths().count(), 0);
    assert_eq!(frame.circles().count(), 0);
    // axes keep their ticks while hidden
    assert!(frame.texts().any(|t| t == "20"));

    c.set_visible(true);
    assert_eq!(c.frame().paths().count(), 1);
    assert_eq!(c.pointer_move(Some((61.0, 70.0))), HoverChange::Moved);
}

#[test]
fn empty_series_renders_without_tooltip() {
    let mut c = LineChart::new(Series::empty(), RenderOptions::default());
    assert_eq!(c.pointer_move(Some((200.0, 100.0))), HoverChange::Unchanged);
    assert!(c.hover().is_none());
    let frame = c.frame();
    assert_eq!(frame.paths().count(), 0);
    assert_eq!(frame.texts().count(), 0);
    assert!(c.render_svg().starts_with("<svg"));
}

#[test]
fn resize_recomputes_scales_and_keeps_hover() {
    let mut c = chart();
    c.pointer_move(Some((110.0, 70.0)));
    c.resize(280, 170);
    assert_eq!(c.view().plot.width, 200.0);
    let hover = c.hover().expect("still hovering");
    assert_eq!(hover.located.index, 1);
    assert_eq!(hover.located.x, 100.0);

    assert_eq!(c.pointer_move(Some((160.0, 70.0))), HoverChange::Unchanged);
    assert_eq!(c.pointer_move(Some((250.0, 70.0))), HoverChange::Moved);
    assert_eq!(c.hover().unwrap().located.index, 2);
}

#[test]
fn container_smaller_than_insets_does_not_fault() {
    let mut c = chart();
    c.resize(40, 30);
    assert_eq!(c.view().plot.width, 0.0);
    let _ = c.pointer_move(Some((60.0, 20.0)));
    assert!(c.render_svg().contains("</svg>"));
}

#[test]
fn path_is_projected_into_container_space() {
    let c = chart();
    let frame = c.frame();
    let path = frame.paths().next().expect("path");
    assert_eq!(path, &vec![(60.0, 70.0), (110.0, 20.0), (160.0, 45.0)]);
}
