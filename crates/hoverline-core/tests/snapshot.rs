// File: crates/hoverline-core/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart with a hovered point to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use hoverline_core::{DataPoint, LineChart, RenderOptions, Series};

fn render_svg() -> String {
    let data: Vec<DataPoint> = [(0, 10.0), (86_400_000, 40.0), (172_800_000, 25.0), (259_200_000, 55.0)]
        .iter()
        .map(|&(t, v)| DataPoint::from_millis(t, v).unwrap())
        .collect();
    let opts = RenderOptions { width: 400, height: 240, ..RenderOptions::default() };
    let mut chart = LineChart::new(Series::new(&data).unwrap(), opts);
    chart.pointer_move(Some((200.0, 120.0)));
    chart.render_svg()
}

#[test]
fn golden_hovered_chart() {
    let svg = render_svg();
    assert!(svg.contains("stroke-dasharray='4 4'"));
    assert!(svg.contains("Value: 40"));

    let snap_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/hovered_chart.svg");
    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        if let Some(parent) = snap_path.parent() { std::fs::create_dir_all(parent).expect("create snapshots dir"); }
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(svg, want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
