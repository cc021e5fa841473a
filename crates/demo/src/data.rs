// File: crates/demo/src/data.rs
// Summary: Demo data sources: seeded mock samples and a `timestamp,value` CSV loader.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use hoverline_core::{DataPoint, Series};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// `n` daily samples starting 13 days before `now`; values are integers in [20, 120).
pub fn mock_series(n: usize, seed: Option<u64>, now: DateTime<Utc>) -> Result<Series> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let points: Vec<DataPoint> = (0..n as i64)
        .map(|i| {
            let timestamp = now - Duration::days(13 - i);
            let value = (rng.gen::<f64>() * 100.0).floor() + 20.0;
            DataPoint::new(timestamp, value)
        })
        .collect();
    debug!(samples = points.len(), ?seed, "generated mock series");
    Ok(Series::from_vec(points)?)
}

#[derive(Debug, Deserialize)]
struct Record {
    timestamp: String,
    value: f64,
}

/// Load a `timestamp,value` CSV. Timestamps are RFC 3339 or epoch milliseconds.
pub fn load_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut points = Vec::new();
    for (row, rec) in rdr.deserialize::<Record>().enumerate() {
        let rec = rec.with_context(|| format!("row {}", row + 1))?;
        match parse_timestamp(&rec.timestamp) {
            Some(ts) => points.push(DataPoint::new(ts, rec.value)),
            None => warn!(row = row + 1, timestamp = %rec.timestamp, "skipping row with unparseable timestamp"),
        }
    }
    let series = Series::from_vec(points).with_context(|| format!("validating {}", path.display()))?;
    debug!(points = series.len(), path = %path.display(), "loaded CSV series");
    Ok(series)
}

pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(ms) = s.parse::<i64>() {
        return DateTime::from_timestamp_millis(ms);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|t| t.with_timezone(&Utc))
}

/// Resolve path, trying a .csv/.cvs swap if needed. Returns (actual_path, used_alt).
pub fn resolve_path(raw: &Path) -> Result<(PathBuf, bool)> {
    if raw.exists() {
        return Ok((raw.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(raw) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", raw.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    let mut alt = p.to_path_buf();
    match ext.as_str() {
        "cvs" => alt.set_extension("csv"),
        "csv" => alt.set_extension("cvs"),
        _ => return None,
    };
    Some(alt)
}
