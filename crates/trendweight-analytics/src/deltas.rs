// ABOUTME: "Change since N days ago" deltas over the trend series of one mode
// ABOUTME: Exact-date anchors, minimum-density guards, and round-before-difference semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

//! Delta Calculator
//!
//! Deltas compare the most recent trend value with the trend value on an
//! exact earlier calendar date. Both sides are rounded to display precision
//! before subtracting so the delta always agrees with the rounded trend
//! values shown beside it.
//!
//! An anchor is only trusted when enough points lie between it and the most
//! recent point: at least 4 for a week, 9 for two weeks and 19 for a month.

use chrono::{Duration, Local, NaiveDate};
use tracing::debug;
use trendweight_core::constants::analytics::{DeltaWindow, LOOKBACK_WINDOWS, YESTERDAY};
use trendweight_core::models::{DataPoint, Delta, Mode};

use crate::config::DeltaConfig;

/// Compute deltas for `points` as of `today` with the default policy
///
/// `points` must be sorted ascending by date, as produced by
/// [`compute_data_points`](crate::data_points::compute_data_points).
#[must_use]
pub fn compute_deltas(mode: Mode, points: &[DataPoint], today: NaiveDate) -> Vec<Delta> {
    compute_deltas_with_config(&DeltaConfig::default(), mode, points, today)
}

/// Compute deltas as of the local calendar date
#[must_use]
pub fn compute_deltas_today(mode: Mode, points: &[DataPoint]) -> Vec<Delta> {
    compute_deltas(mode, points, Local::now().date_naive())
}

/// Compute deltas with an explicit policy
///
/// Returns at most four deltas, in the order yesterday, last week, two weeks
/// ago, a month ago. An empty list means the series is too short or too stale.
#[must_use]
pub fn compute_deltas_with_config(
    config: &DeltaConfig,
    mode: Mode,
    points: &[DataPoint],
    today: NaiveDate,
) -> Vec<Delta> {
    // Most recent first
    let recent: Vec<&DataPoint> = points.iter().rev().collect();
    let Some(latest) = recent.first() else {
        return Vec::new();
    };

    let age = (today - latest.date).num_days();
    if age > config.max_staleness_days || recent.len() <= 1 {
        debug!(%mode, age, count = recent.len(), "Series too stale or short for deltas");
        return Vec::new();
    }

    let decimals = rounding_decimals(config, mode);
    let latest_trend = round_half_up(latest.trend, decimals);
    let delta_from = |anchor: &DataPoint, window: &DeltaWindow| Delta {
        period: window.period,
        description: window.description.to_owned(),
        delta: latest_trend - round_half_up(anchor.trend, decimals),
    };

    let mut deltas = Vec::with_capacity(1 + LOOKBACK_WINDOWS.len());

    if age <= config.yesterday_max_age_days {
        // Only the reading just before the latest can anchor "yesterday"
        let previous = recent
            .get(1)
            .copied()
            .filter(|p| (latest.date - p.date).num_days() == YESTERDAY.period);
        if let Some(previous) = previous {
            deltas.push(delta_from(previous, &YESTERDAY));
        }
    }

    for window in &LOOKBACK_WINDOWS {
        let target = latest.date - Duration::days(window.period);
        match recent.iter().position(|p| p.date == target) {
            Some(index) if index >= window.min_index => {
                deltas.push(delta_from(recent[index], window));
            }
            Some(index) => {
                debug!(
                    %mode,
                    period = window.period,
                    index,
                    required = window.min_index,
                    "Anchor found but series too sparse"
                );
            }
            None => {}
        }
    }

    deltas
}

const fn rounding_decimals(config: &DeltaConfig, mode: Mode) -> i32 {
    match mode {
        Mode::FatPercent => config.ratio_rounding_decimals,
        Mode::Weight | Mode::FatMass | Mode::LeanMass => config.mass_rounding_decimals,
    }
}

/// Round half toward positive infinity at `decimals` places
///
/// Matches what a display layer shows: `80.45` rounds to `80.5` and `-0.25`
/// rounds to `-0.2`.
#[must_use]
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    value.mul_add(scale, 0.5).floor() / scale
}
