// File: crates/hoverline-core/tests/axis.rs
// Purpose: Tick generation and label formatting for both axes.

use chrono::{Datelike, NaiveDate, TimeZone, Utc, Weekday};
use hoverline_core::axis::{format_linear, format_time, linear_ticks, time_ticks};
use hoverline_core::{Axis, TimeScale, ValueScale};

fn ms(y: i32, m: u32, d: u32) -> f64 {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp_millis() as f64
}

#[test]
fn linear_ticks_use_round_steps() {
    let t = linear_ticks(0.0, 120.0, 10);
    assert_eq!(t.len(), 13);
    assert_eq!(t[0], 0.0);
    assert_eq!(t[12], 120.0);

    assert_eq!(linear_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(linear_ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
}

#[test]
fn linear_ticks_degenerate_inputs() {
    assert_eq!(linear_ticks(5.0, 5.0, 10), vec![5.0]);
    assert!(linear_ticks(0.0, 10.0, 0).is_empty());
    assert!(linear_ticks(0.0, f64::NAN, 10).is_empty());
}

#[test]
fn linear_labels() {
    assert_eq!(format_linear(1200.0, 100.0), "1,200");
    assert_eq!(format_linear(20.0, 10.0), "20");
    assert_eq!(format_linear(0.2, 0.2), "0.2");
    assert_eq!(format_linear(-1500.5, 0.5), "-1,500.5");
    assert_eq!(format_linear(-0.0, 1.0), "0");
}

#[test]
fn value_axis_ticks_sit_on_inverted_pixels() {
    let axis = Axis::value(&ValueScale::new(100.0, 200.0), 10);
    let first = axis.ticks.first().unwrap();
    let last = axis.ticks.last().unwrap();
    assert_eq!((first.value, first.offset, first.label.as_str()), (0.0, 200.0, "0"));
    assert_eq!((last.value, last.offset, last.label.as_str()), (100.0, 0.0, "100"));
}

#[test]
fn two_hundred_daily_samples_tick_monthly() {
    let start = ms(2024, 1, 1);
    let stop = start + 199.0 * 86_400_000.0;
    let ticks = time_ticks(start, stop, 10);
    assert_eq!(ticks.len(), 7);
    assert!(ticks.iter().all(|t| t.day() == 1));
    let labels: Vec<String> = ticks.iter().map(|t| format_time(*t)).collect();
    assert_eq!(labels[0], "2024");
    assert_eq!(labels[1], "February");
    assert_eq!(labels[6], "July");
}

#[test]
fn ten_weeks_tick_on_sundays() {
    let start = ms(2024, 1, 1);
    let stop = start + 70.0 * 86_400_000.0;
    let ticks = time_ticks(start, stop, 10);
    assert_eq!(ticks.len(), 10);
    assert!(ticks.iter().all(|t| t.weekday() == Weekday::Sun));
    assert_eq!(format_time(ticks[0]), "Jan 07");
}

#[test]
fn ten_hours_tick_hourly() {
    let ticks = time_ticks(0.0, 10.0 * 3_600_000.0, 10);
    assert_eq!(ticks.len(), 11);
    assert_eq!(format_time(ticks[0]), "1970");
    assert_eq!(format_time(ticks[1]), "01 AM");
    assert_eq!(format_time(ticks[10]), "10 AM");
}

#[test]
fn sub_second_spans_tick_in_milliseconds() {
    let ticks = time_ticks(0.0, 20.0, 10);
    let millis: Vec<i64> = ticks.iter().map(|t| t.timestamp_millis()).collect();
    assert_eq!(millis, vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
    assert_eq!(format_time(ticks[1]), ".002");
}

#[test]
fn multi_scale_time_format() {
    let at = |y, mo, d, h, mi, s| Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap();
    assert_eq!(format_time(at(2024, 3, 5, 0, 0, 0)), "Tue 05");
    assert_eq!(format_time(at(2024, 3, 10, 0, 0, 0)), "Mar 10");
    assert_eq!(format_time(at(2024, 3, 1, 0, 0, 0)), "March");
    assert_eq!(format_time(at(2024, 3, 5, 15, 0, 0)), "03 PM");
    assert_eq!(format_time(at(2024, 3, 5, 15, 30, 0)), "03:30");
    assert_eq!(format_time(at(2024, 3, 5, 15, 30, 9)), ":09");
}

#[test]
fn degenerate_time_domain_gives_single_tick() {
    let scale = TimeScale::new(86_400_000.0, 86_400_000.0, 300.0);
    let axis = Axis::time(&scale, 10);
    assert_eq!(axis.ticks.len(), 1);
    assert_eq!(axis.ticks[0].offset, 150.0);
}
