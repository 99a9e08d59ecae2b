// ABOUTME: Least-squares slopes over fixed trailing windows of trend values
// ABOUTME: Weight slope over measurements and a mode-aware active slope over chart points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight
#![allow(clippy::cast_precision_loss)] // Window indices are at most a few dozen

//! Slope Estimator
//!
//! x is the position within the window (0, 1, 2, ...), not the calendar
//! date, so the slope is "per point" and a gap of several days between two
//! points counts as one step. Body-composition modes use a wider window than
//! weight because impedance readings are noisier.

use tracing::trace;
use trendweight_core::constants::analytics::MIN_REGRESSION_POINTS;
use trendweight_core::models::{DataPoint, Measurement, Mode};

use crate::config::SlopeConfig;

/// Ordinary least-squares slope of `values` against their positions
///
/// Returns `0.0` for fewer than two values.
#[must_use]
pub fn least_squares_slope(values: &[f64]) -> f64 {
    if values.len() < MIN_REGRESSION_POINTS {
        return 0.0;
    }

    let n = values.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_xx) = values.iter().enumerate().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sxx), (i, &y)| {
            let x = i as f64;
            (sx + x, sy + y, x.mul_add(y, sxy), x.mul_add(x, sxx))
        },
    );

    // Positions are distinct, so the denominator is positive for n >= 2
    n.mul_add(sum_xy, -(sum_x * sum_y)) / n.mul_add(sum_xx, -(sum_x * sum_x))
}

/// Slope of the trend weight over the trailing measurements
#[must_use]
pub fn compute_weight_slope(measurements: &[Measurement]) -> f64 {
    compute_weight_slope_with_config(&SlopeConfig::default(), measurements)
}

/// Weight slope with an explicit window
///
/// The window is taken first and non-finite trends are skipped afterwards,
/// so a gap shrinks the window rather than reaching further back.
#[must_use]
pub fn compute_weight_slope_with_config(config: &SlopeConfig, measurements: &[Measurement]) -> f64 {
    let values: Vec<f64> = trailing(measurements, config.weight_window)
        .iter()
        .map(|m| m.trend_weight)
        .filter(|trend| trend.is_finite())
        .collect();
    trace!(count = values.len(), "Weight slope window");
    least_squares_slope(&values)
}

/// Slope of the active mode's trend over the trailing chart points
#[must_use]
pub fn compute_active_slope(mode: Mode, points: &[DataPoint]) -> f64 {
    compute_active_slope_with_config(&SlopeConfig::default(), mode, points)
}

/// Active slope with explicit windows
#[must_use]
pub fn compute_active_slope_with_config(
    config: &SlopeConfig,
    mode: Mode,
    points: &[DataPoint],
) -> f64 {
    let window = active_window(config, mode);
    let values: Vec<f64> = trailing(points, window).iter().map(|p| p.trend).collect();
    trace!(%mode, window, count = values.len(), "Active slope window");
    least_squares_slope(&values)
}

/// Window size for `mode`
#[must_use]
pub const fn active_window(config: &SlopeConfig, mode: Mode) -> usize {
    if mode.is_body_composition() {
        config.composition_mode_window
    } else {
        config.weight_mode_window
    }
}

fn trailing<T>(items: &[T], window: usize) -> &[T] {
    &items[items.len().saturating_sub(window)..]
}
