// File: crates/hoverline-core/src/axis.rs
// Summary: Axis tick generation and label formatting for the time and value axes.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc, Weekday};

use crate::scale::{ScaleTransform, TimeScale, ValueScale};

const SECOND: i64 = 1_000;
const MINUTE: i64 = SECOND * 60;
const HOUR: i64 = MINUTE * 60;
const DAY: i64 = HOUR * 24;
const WEEK: i64 = DAY * 7;
const MONTH: i64 = DAY * 30;
const YEAR: i64 = DAY * 365;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Time,
    Linear,
}

/// One tick: domain value, pixel offset along the axis, and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub kind: AxisKind,
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn empty(kind: AxisKind) -> Self {
        Self { kind, ticks: Vec::new() }
    }

    /// Bottom axis ticks for a time scale.
    pub fn time(scale: &TimeScale, count: usize) -> Self {
        let (start, stop) = scale.domain();
        let ticks = time_ticks(start, stop, count)
            .into_iter()
            .map(|t| {
                let value = t.timestamp_millis() as f64;
                Tick { value, offset: scale.to_px(value), label: format_time(t) }
            })
            .collect();
        Self { kind: AxisKind::Time, ticks }
    }

    /// Left axis ticks for a value scale.
    pub fn value(scale: &ValueScale, count: usize) -> Self {
        let (start, stop) = scale.domain();
        let step = tick_step(start.min(stop), start.max(stop), count);
        let ticks = linear_ticks(start, stop, count)
            .into_iter()
            .map(|v| Tick { value: v, offset: scale.to_px(v), label: format_linear(v, step) })
            .collect();
        Self { kind: AxisKind::Linear, ticks }
    }
}

// ---- linear ticks -----------------------------------------------------------

/// Step from {1, 2, 5} × 10^k giving roughly `count` intervals over [start, stop].
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let step0 = (stop - start).abs() / count.max(1) as f64;
    if !(step0 > 0.0) || !step0.is_finite() {
        return 0.0;
    }
    let mut step1 = 10f64.powf(step0.log10().floor());
    let error = step0 / step1;
    if error >= 50f64.sqrt() {
        step1 *= 10.0;
    } else if error >= 10f64.sqrt() {
        step1 *= 5.0;
    } else if error >= 2f64.sqrt() {
        step1 *= 2.0;
    }
    step1
}

/// Evenly spaced round values inside [start, stop], in the direction of the domain.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let step = tick_step(lo, hi, count);
    if step <= 0.0 {
        return Vec::new();
    }
    // Fractional steps divide by the inverse to keep values like 0.3 exact.
    let mut ticks: Vec<f64> = if step < 1.0 {
        let inv = (1.0 / step).round();
        let (i0, i1) = ((lo * inv).ceil() as i64, (hi * inv).floor() as i64);
        (i0..=i1).map(|i| i as f64 / inv).collect()
    } else {
        let (i0, i1) = ((lo / step).ceil() as i64, (hi / step).floor() as i64);
        (i0..=i1).map(|i| i as f64 * step).collect()
    };
    if stop < start {
        ticks.reverse();
    }
    ticks
}

/// Fixed-precision label implied by the tick step, with thousands separators.
pub fn format_linear(v: f64, step: f64) -> String {
    let precision = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let body = format!("{:.*}", precision, v.abs());
    let (int, frac) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body.as_str(), None),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let negative = v < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    out
}

// ---- time ticks -------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Interval {
    Millis(i64),
    Fixed(i64),
    Day(u32),
    Week,
    Month(u32),
    Year(i32),
}

const TICK_INTERVALS: [(Interval, i64); 18] = [
    (Interval::Fixed(SECOND), SECOND),
    (Interval::Fixed(5 * SECOND), 5 * SECOND),
    (Interval::Fixed(15 * SECOND), 15 * SECOND),
    (Interval::Fixed(30 * SECOND), 30 * SECOND),
    (Interval::Fixed(MINUTE), MINUTE),
    (Interval::Fixed(5 * MINUTE), 5 * MINUTE),
    (Interval::Fixed(15 * MINUTE), 15 * MINUTE),
    (Interval::Fixed(30 * MINUTE), 30 * MINUTE),
    (Interval::Fixed(HOUR), HOUR),
    (Interval::Fixed(3 * HOUR), 3 * HOUR),
    (Interval::Fixed(6 * HOUR), 6 * HOUR),
    (Interval::Fixed(12 * HOUR), 12 * HOUR),
    (Interval::Day(1), DAY),
    (Interval::Day(2), 2 * DAY),
    (Interval::Week, WEEK),
    (Interval::Month(1), MONTH),
    (Interval::Month(3), 3 * MONTH),
    (Interval::Year(1), YEAR),
];

fn choose_interval(start: f64, stop: f64, count: usize) -> Interval {
    let target = (stop - start).abs() / count.max(1) as f64;
    let i = TICK_INTERVALS.partition_point(|(_, d)| (*d as f64) <= target);
    if i == TICK_INTERVALS.len() {
        let step = tick_step(start / YEAR as f64, stop / YEAR as f64, count).max(1.0);
        return Interval::Year(step as i32);
    }
    if i == 0 {
        return Interval::Millis(tick_step(start, stop, count).max(1.0) as i64);
    }
    let (lower, lower_d) = TICK_INTERVALS[i - 1];
    let (upper, upper_d) = TICK_INTERVALS[i];
    if target / (lower_d as f64) < (upper_d as f64) / target { lower } else { upper }
}

/// Calendar-aligned UTC ticks inside [start, stop] (epoch milliseconds).
pub fn time_ticks(start: f64, stop: f64, count: usize) -> Vec<DateTime<Utc>> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (lo_ms, hi_ms) = (lo.ceil() as i64, hi.floor() as i64);
    let mut ticks: Vec<DateTime<Utc>> = if lo == hi {
        DateTime::from_timestamp_millis(lo_ms).into_iter().collect()
    } else {
        match choose_interval(lo, hi, count) {
            Interval::Millis(step) | Interval::Fixed(step) => fixed_ticks(lo_ms, hi_ms, step),
            Interval::Day(step) => day_ticks(lo_ms, hi_ms, |d| (d.day0() % step) == 0),
            Interval::Week => day_ticks(lo_ms, hi_ms, |d| d.weekday() == Weekday::Sun),
            Interval::Month(step) => month_ticks(lo_ms, hi_ms, step),
            Interval::Year(step) => year_ticks(lo_ms, hi_ms, step),
        }
    };
    if stop < start {
        ticks.reverse();
    }
    ticks
}

fn fixed_ticks(lo: i64, hi: i64, step: i64) -> Vec<DateTime<Utc>> {
    let step = step.max(1);
    let first = lo.div_euclid(step) * step + if lo.rem_euclid(step) == 0 { 0 } else { step };
    (0..)
        .map(|k| first + k * step)
        .take_while(|t| *t <= hi)
        .filter_map(DateTime::from_timestamp_millis)
        .collect()
}

fn start_of_day(ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(ms).map(|t| t.date_naive())
}

fn midnight(d: NaiveDate) -> Option<DateTime<Utc>> {
    d.and_hms_opt(0, 0, 0).map(|n| n.and_utc())
}

fn day_ticks(lo: i64, hi: i64, keep: impl Fn(NaiveDate) -> bool) -> Vec<DateTime<Utc>> {
    let Some(mut day) = start_of_day(lo) else { return Vec::new() };
    let mut out = Vec::new();
    while let Some(t) = midnight(day) {
        let ms = t.timestamp_millis();
        if ms > hi {
            break;
        }
        if ms >= lo && keep(day) {
            out.push(t);
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    out
}

fn month_ticks(lo: i64, hi: i64, step: u32) -> Vec<DateTime<Utc>> {
    let Some(first) = start_of_day(lo) else { return Vec::new() };
    let (mut year, mut month0) = (first.year(), first.month0());
    let mut out = Vec::new();
    loop {
        let Some(t) = NaiveDate::from_ymd_opt(year, month0 + 1, 1).and_then(midnight) else { break };
        let ms = t.timestamp_millis();
        if ms > hi {
            break;
        }
        if ms >= lo && month0 % step.max(1) == 0 {
            out.push(t);
        }
        month0 += 1;
        if month0 == 12 {
            month0 = 0;
            year += 1;
        }
    }
    out
}

fn year_ticks(lo: i64, hi: i64, step: i32) -> Vec<DateTime<Utc>> {
    let (Some(first), Some(last)) = (start_of_day(lo), start_of_day(hi)) else { return Vec::new() };
    let step = step.max(1);
    (first.year()..=last.year())
        .filter(|y| y.rem_euclid(step) == 0)
        .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1).and_then(midnight))
        .filter(|t| (lo..=hi).contains(&t.timestamp_millis()))
        .collect()
}

/// Multi-scale label: the coarsest unit at which the tick is not aligned.
pub fn format_time(t: DateTime<Utc>) -> String {
    let pattern = if t.timestamp_subsec_millis() != 0 {
        "%.3f"
    } else if t.second() != 0 {
        ":%S"
    } else if t.minute() != 0 {
        "%I:%M"
    } else if t.hour() != 0 {
        "%I %p"
    } else if t.day() != 1 {
        if t.weekday() == Weekday::Sun { "%b %d" } else { "%a %d" }
    } else if t.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    t.format(pattern).to_string()
}
