// File: crates/demo/src/main.rs
// Summary: Demo CLI: builds a hover line chart from mock or CSV data, optionally simulates
// a pointer position, and writes the rendered chart to SVG (and PNG with `png`).

use anyhow::{Context, Result};
use clap::Parser;
use hoverline_core::{theme, HoverChange, LineChart, RenderOptions};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod data;

#[derive(Debug, Parser)]
#[command(name = "hoverline-demo", about = "Render an interactive time-series line chart to SVG")]
struct Args {
    /// `timestamp,value` CSV to plot instead of mock data
    #[arg(long)]
    input: Option<PathBuf>,
    /// Number of mock samples
    #[arg(long, default_value_t = 200)]
    samples: usize,
    /// Seed for the mock generator; entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = hoverline_core::types::WIDTH)]
    width: u32,
    #[arg(long, default_value_t = hoverline_core::types::HEIGHT)]
    height: u32,
    /// Simulated pointer position in container pixels
    #[arg(long, requires = "pointer_y")]
    pointer_x: Option<f64>,
    #[arg(long, requires = "pointer_x")]
    pointer_y: Option<f64>,
    /// Render with the line hidden
    #[arg(long)]
    hidden: bool,
    #[arg(long, default_value = "light")]
    theme: String,
    /// Thin the drawn path above this many points
    #[arg(long)]
    max_path_points: Option<usize>,
    #[arg(long, default_value = "target/out/hoverline.svg")]
    out: PathBuf,
    /// Also write a PNG next to the SVG (needs the `png` feature)
    #[arg(long)]
    png: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hoverline_demo=info,hoverline_core=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let series = match &args.input {
        Some(raw) => {
            let (path, used_alt) = data::resolve_path(raw)?;
            if used_alt {
                info!(path = %path.display(), "extension swapped between .csv/.cvs");
            }
            data::load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => data::mock_series(args.samples, args.seed, chrono::Utc::now())?,
    };
    info!(points = series.len(), "series ready");
    if series.is_empty() {
        warn!("series is empty; rendering axes only");
    }

    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        theme: theme::find(&args.theme),
        max_path_points: args.max_path_points,
        ..RenderOptions::default()
    };
    let mut chart = LineChart::new(series, opts);
    if args.hidden {
        chart.set_visible(false);
    }

    if let (Some(x), Some(y)) = (args.pointer_x, args.pointer_y) {
        match chart.pointer_move(Some((x, y))) {
            HoverChange::Moved => {
                if let Some(hover) = chart.hover() {
                    let p = hover.located.point;
                    info!(index = hover.located.index, timestamp = %p.timestamp, value = p.value, "hovering");
                }
            }
            _ => info!(x, y, "pointer did not select a point"),
        }
    }

    chart.render_to_svg(&args.out)?;
    info!(path = %args.out.display(), "wrote SVG");

    if args.png {
        write_png(&chart, &args)?;
    }
    Ok(())
}

#[cfg(feature = "png")]
fn write_png(chart: &LineChart, args: &Args) -> Result<()> {
    let out = args.out.with_extension("png");
    chart.render_to_png(&out)?;
    info!(path = %out.display(), "wrote PNG");
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_png(_chart: &LineChart, _args: &Args) -> Result<()> {
    warn!("PNG output requested but the `png` feature is disabled; rebuild with --features png");
    Ok(())
}
