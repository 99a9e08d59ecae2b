// ABOUTME: Integration tests for mode-specific chart point projection
// ABOUTME: Covers sorting, edge trimming, interior gaps, and interpolation flag selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Datelike;
use common::{approx_eq, date, init_test_logging};
use std::slice;
use trendweight::analytics::compute_data_points;
use trendweight::models::{Measurement, Mode};

fn weighed(day: u32, actual: Option<f64>, trend: f64) -> Measurement {
    Measurement::weight_only(date(2024, 1, day), "computed", actual, trend)
}

fn with_fat(day: u32, actual: Option<f64>, trend: Option<f64>) -> Measurement {
    let mut m = weighed(day, Some(80.0), 80.0);
    m.actual_fat_percent = actual;
    m.trend_fat_percent = trend;
    m
}

#[test]
fn test_two_day_weight_scenario() {
    init_test_logging();
    let measurements = vec![weighed(1, Some(80.0), 80.1), weighed(2, Some(81.0), 81.1)];

    let points = compute_data_points(Mode::Weight, &measurements);

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, date(2024, 1, 1));
    assert_eq!(points[0].actual, Some(80.0));
    assert!(approx_eq(points[0].trend, 80.1));
    assert!(!points[0].is_interpolated);
    assert_eq!(points[1].date, date(2024, 1, 2));
    assert_eq!(points[1].actual, Some(81.0));
    assert!(approx_eq(points[1].trend, 81.1));
    assert!(!points[1].is_interpolated);
}

#[test]
fn test_output_is_sorted_regardless_of_input_order() {
    let measurements = vec![
        weighed(5, Some(80.5), 80.5),
        weighed(2, Some(80.2), 80.2),
        weighed(9, Some(80.9), 80.9),
        weighed(1, Some(80.1), 80.1),
    ];

    let points = compute_data_points(Mode::Weight, &measurements);

    let dates: Vec<_> = points.iter().map(|p| p.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(dates, sorted);
    assert_eq!(points.len(), measurements.len());
}

#[test]
fn test_leading_and_trailing_gaps_are_trimmed() {
    let measurements = vec![
        with_fat(1, None, Some(0.25)),
        with_fat(2, None, Some(0.25)),
        with_fat(3, Some(0.25), Some(0.25)),
        with_fat(4, Some(0.24), Some(0.248)),
        with_fat(5, None, Some(0.247)),
    ];

    let points = compute_data_points(Mode::FatPercent, &measurements);

    let dates: Vec<_> = points.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![date(2024, 1, 3), date(2024, 1, 4)]);
}

#[test]
fn test_interior_gap_keeps_trend() {
    let measurements = vec![
        weighed(1, Some(80.0), 80.0),
        weighed(2, None, 79.9),
        weighed(3, Some(79.5), 79.8),
    ];

    let points = compute_data_points(Mode::Weight, &measurements);

    assert_eq!(points.len(), 3);
    assert_eq!(points[1].actual, None);
    assert!(approx_eq(points[1].trend, 79.9));
}

#[test]
fn test_all_missing_actuals_yield_empty_output() {
    let measurements = vec![with_fat(1, None, Some(0.25)), with_fat(2, None, Some(0.25))];

    assert!(compute_data_points(Mode::FatPercent, &measurements).is_empty());
    assert!(compute_data_points(Mode::FatMass, &measurements).is_empty());
    assert!(compute_data_points(Mode::Weight, &[]).is_empty());
}

#[test]
fn test_trim_is_idempotent() {
    let measurements = vec![
        weighed(1, None, 80.0),
        weighed(2, Some(80.0), 80.0),
        weighed(3, None, 80.0),
        weighed(4, Some(79.0), 79.8),
        weighed(5, None, 79.7),
    ];

    let once = compute_data_points(Mode::Weight, &measurements);
    let again_input: Vec<Measurement> = once
        .iter()
        .map(|p| Measurement::weight_only(p.date, p.source.clone(), p.actual, p.trend))
        .collect();
    let twice = compute_data_points(Mode::Weight, &again_input);

    assert_eq!(once, twice);
}

#[test]
fn test_trendless_final_reading_is_trimmed_with_its_gap() {
    let measurements = vec![
        with_fat(1, Some(0.25), Some(0.25)),
        with_fat(2, None, Some(0.249)),
        with_fat(3, Some(0.24), None),
    ];

    let once = compute_data_points(Mode::FatPercent, &measurements);
    assert_eq!(once.len(), 1);
    assert_eq!(once[0].date, date(2024, 1, 1));
    assert!(once.last().unwrap().actual.is_some());

    let rerun: Vec<Measurement> = once
        .iter()
        .map(|p| with_fat(p.date.day(), p.actual, Some(p.trend)))
        .collect();
    assert_eq!(compute_data_points(Mode::FatPercent, &rerun), once);
}

#[test]
fn test_interpolation_flag_follows_mode() {
    let mut m = with_fat(1, Some(0.25), Some(0.25));
    m.weight_is_interpolated = true;
    m.fat_is_interpolated = false;
    m.actual_lean_mass = Some(60.0);
    m.trend_lean_mass = Some(60.0);

    let weight = compute_data_points(Mode::Weight, slice::from_ref(&m));
    let lean = compute_data_points(Mode::LeanMass, slice::from_ref(&m));

    assert!(weight[0].is_interpolated);
    assert!(!lean[0].is_interpolated);
}
