// File: crates/hoverline-core/src/series.rs
// Summary: DataPoint and the timestamp-ordered Series that drives the chart.
// Notes:
// - A Series always holds its points sorted ascending by timestamp. Construction sorts
//   a private copy, so caller-owned data is never reordered.
// - Equal timestamps keep the caller's relative order (stable sort).

use chrono::{DateTime, Utc};

use crate::error::{ChartError, ChartResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Build a point from epoch milliseconds.
    pub fn from_millis(millis: i64, value: f64) -> ChartResult<Self> {
        let timestamp = DateTime::from_timestamp_millis(millis)
            .ok_or(ChartError::TimestampOutOfRange(millis))?;
        Ok(Self { timestamp, value })
    }

    /// Timestamp as epoch milliseconds, the unit the time scale works in.
    #[inline]
    pub fn millis(&self) -> f64 {
        self.timestamp.timestamp_millis() as f64
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Validate and sort a copy of `points`.
    pub fn new(points: &[DataPoint]) -> ChartResult<Self> {
        Self::from_vec(points.to_vec())
    }

    /// Validate and sort an owned vector of points.
    pub fn from_vec(mut points: Vec<DataPoint>) -> ChartResult<Self> {
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.value.is_finite()) {
            return Err(ChartError::NonFiniteValue { index, value: p.value });
        }
        points.sort_by_key(|p| p.timestamp);
        Ok(Self { points })
    }

    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn get(&self, index: usize) -> Option<&DataPoint> { self.points.get(index) }
    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> { self.points.iter() }

    /// First and last timestamp in epoch milliseconds.
    pub fn time_extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.millis(), last.millis()))
    }

    /// Largest value in the series.
    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
