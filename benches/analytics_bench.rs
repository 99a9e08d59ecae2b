// ABOUTME: Criterion benchmarks for the trend analytics pipeline
// ABOUTME: Measures conversion, projection, deltas, slopes, and cached snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

//! Criterion benchmarks for the trend analytics pipeline.
//!
//! Series lengths cover a month, a year and a decade of daily readings.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trendweight::analytics::{
    compute_active_slope, compute_data_points, compute_deltas, compute_weight_slope,
    convert_measurements, scale_readings,
};
use trendweight::dashboard::{DashboardCache, DashboardInputs, DashboardSnapshot};
use trendweight::models::{ApiComputedMeasurement, Mode, ProfileData, ViewType, WeightUnit};

const SERIES_LENGTHS: [usize; 3] = [30, 365, 3650];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default()
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_rows(count: usize) -> Vec<ApiComputedMeasurement> {
    let last = today();
    (0..count)
        .map(|index| {
            let x = index as f64;
            let trend = 90.0 - x * 0.01 + (x / 10.0).sin() * 0.3;
            let has_fat = index % 3 != 0;
            ApiComputedMeasurement {
                date: last - Duration::days((count - 1 - index) as i64),
                actual_weight: trend + (x * 1.7).sin() * 0.8,
                trend_weight: trend,
                weight_is_interpolated: index % 11 == 0,
                fat_is_interpolated: !has_fat,
                actual_fat_percent: has_fat.then_some(0.25 + (x * 0.9).cos() * 0.01),
                trend_fat_percent: Some(0.25 - x * 0.000_01),
                trend_fat_mass: None,
                trend_lean_mass: None,
            }
        })
        .collect()
}

fn inputs(count: usize) -> DashboardInputs {
    DashboardInputs {
        measurements: generate_rows(count),
        profile: Some(ProfileData {
            first_name: "Bench".into(),
            use_metric: false,
        }),
    }
}

fn bench_conversion_and_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    for count in SERIES_LENGTHS {
        let inputs = inputs(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("convert_measurements", count),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    convert_measurements(black_box(&inputs.measurements), inputs.profile.as_ref())
                });
            },
        );

        let measurements = convert_measurements(&inputs.measurements, inputs.profile.as_ref());
        group.bench_with_input(
            BenchmarkId::new("compute_data_points_fatmass", count),
            &measurements,
            |b, measurements| b.iter(|| compute_data_points(Mode::FatMass, black_box(measurements))),
        );
    }

    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for count in SERIES_LENGTHS {
        let inputs = inputs(count);
        let measurements = convert_measurements(&inputs.measurements, inputs.profile.as_ref());
        let points = compute_data_points(Mode::Weight, &measurements);

        group.bench_with_input(BenchmarkId::new("deltas", count), &points, |b, points| {
            b.iter(|| compute_deltas(Mode::Weight, black_box(points), today()));
        });
        group.bench_with_input(
            BenchmarkId::new("slopes", count),
            &(measurements, points),
            |b, (measurements, points)| {
                b.iter(|| {
                    (
                        compute_weight_slope(black_box(measurements)),
                        compute_active_slope(Mode::LeanMass, black_box(points)),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_reconciliation(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconciliation");

    for count in SERIES_LENGTHS {
        let inputs = inputs(count);
        let measurements = convert_measurements(&inputs.measurements, inputs.profile.as_ref());
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("computed_newest_first", count),
            &measurements,
            |b, measurements| {
                b.iter(|| {
                    scale_readings(
                        &ViewType::Computed,
                        &[],
                        black_box(measurements),
                        WeightUnit::Pounds,
                        true,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    let inputs = inputs(365);

    group.bench_function("snapshot_uncached", |b| {
        b.iter(|| DashboardSnapshot::compute(black_box(&inputs), Mode::Weight, today()));
    });

    let cache = DashboardCache::with_defaults();
    group.bench_function("snapshot_cached", |b| {
        b.iter(|| cache.snapshot(black_box(&inputs), Mode::Weight, today()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_conversion_and_projection,
    bench_statistics,
    bench_reconciliation,
    bench_dashboard,
);
criterion_main!(benches);
