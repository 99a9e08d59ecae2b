// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Quiet logging setup plus measurement and data point series generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `trendweight`

use chrono::{Duration, NaiveDate};
use std::env;
use std::sync::Once;
use tracing::Level;
use trendweight::models::{ApiComputedMeasurement, DataPoint, Measurement};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// `n` days before `anchor`
pub fn days_before(anchor: NaiveDate, n: i64) -> NaiveDate {
    anchor - Duration::days(n)
}

/// A chart point whose actual equals its trend
pub fn point(date: NaiveDate, trend: f64) -> DataPoint {
    DataPoint {
        date,
        source: "computed".to_owned(),
        actual: Some(trend),
        trend,
        is_interpolated: false,
    }
}

/// `count` consecutive daily points ending on `last`, trends from `trend_at`
pub fn daily_points(last: NaiveDate, count: usize, trend_at: impl Fn(usize) -> f64) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let offset = i64::try_from(count - 1 - i).unwrap();
            point(days_before(last, offset), trend_at(i))
        })
        .collect()
}

/// `count` consecutive daily weight-only measurements ending on `last`
pub fn daily_measurements(
    last: NaiveDate,
    count: usize,
    trend_at: impl Fn(usize) -> f64,
) -> Vec<Measurement> {
    (0..count)
        .map(|i| {
            let offset = i64::try_from(count - 1 - i).unwrap();
            let trend = trend_at(i);
            Measurement::weight_only(days_before(last, offset), "computed", Some(trend), trend)
        })
        .collect()
}

/// A backend row with weight only, kilograms
pub fn api_row(date: NaiveDate, actual_kg: f64, trend_kg: f64) -> ApiComputedMeasurement {
    ApiComputedMeasurement {
        date,
        actual_weight: actual_kg,
        trend_weight: trend_kg,
        weight_is_interpolated: false,
        fat_is_interpolated: false,
        actual_fat_percent: None,
        trend_fat_percent: None,
        trend_fat_mass: None,
        trend_lean_mass: None,
    }
}

/// A backend row with body fat, kilograms and ratios
pub fn api_row_with_fat(
    date: NaiveDate,
    actual_kg: f64,
    trend_kg: f64,
    actual_ratio: f64,
    trend_ratio: f64,
) -> ApiComputedMeasurement {
    ApiComputedMeasurement {
        actual_fat_percent: Some(actual_ratio),
        trend_fat_percent: Some(trend_ratio),
        ..api_row(date, actual_kg, trend_kg)
    }
}

/// Approximate float equality for assertions
pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}
