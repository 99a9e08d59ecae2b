// ABOUTME: Projects measurements into mode-specific chart data points
// ABOUTME: Sorts by date, selects the actual/trend pair per mode, and trims empty edges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

//! DataPoint Projector
//!
//! Leading and trailing days without a reading for the active mode carry no
//! information and are trimmed so the chart does not start or end in a gap.
//! Interior days without a reading are kept: their trend still draws a
//! continuous line while the raw series shows a gap.

use tracing::trace;
use trendweight_core::models::{DataPoint, Measurement, Mode};

/// Fields a mode reads from a measurement
struct Projection {
    actual: Option<f64>,
    trend: Option<f64>,
    is_interpolated: bool,
}

/// Field selector for one mode
type Selector = fn(&Measurement) -> Projection;

fn select_weight(m: &Measurement) -> Projection {
    Projection {
        actual: m.actual_weight,
        trend: Some(m.trend_weight),
        is_interpolated: m.weight_is_interpolated,
    }
}

fn select_fat_percent(m: &Measurement) -> Projection {
    Projection {
        actual: m.actual_fat_percent,
        trend: m.trend_fat_percent,
        is_interpolated: m.fat_is_interpolated,
    }
}

fn select_fat_mass(m: &Measurement) -> Projection {
    Projection {
        actual: m.actual_fat_mass,
        trend: m.trend_fat_mass,
        is_interpolated: m.fat_is_interpolated,
    }
}

fn select_lean_mass(m: &Measurement) -> Projection {
    Projection {
        actual: m.actual_lean_mass,
        trend: m.trend_lean_mass,
        is_interpolated: m.fat_is_interpolated,
    }
}

const fn selector(mode: Mode) -> Selector {
    match mode {
        Mode::Weight => select_weight,
        Mode::FatPercent => select_fat_percent,
        Mode::FatMass => select_fat_mass,
        Mode::LeanMass => select_lean_mass,
    }
}

/// Project `measurements` into chart points for `mode`
///
/// Input order does not matter; the output is sorted ascending by date and
/// never longer than the input. Points whose trend is missing for the mode
/// are dropped before the edges are trimmed, so the result always starts and
/// ends on a reading.
#[must_use]
pub fn compute_data_points(mode: Mode, measurements: &[Measurement]) -> Vec<DataPoint> {
    let mut sorted: Vec<&Measurement> = measurements.iter().collect();
    sorted.sort_by_key(|m| m.date);

    let select = selector(mode);
    let points: Vec<DataPoint> = sorted
        .into_iter()
        .filter_map(|m| {
            let p = select(m);
            p.trend.map(|trend| DataPoint {
                date: m.date,
                source: m.source.clone(),
                actual: p.actual,
                trend,
                is_interpolated: p.is_interpolated,
            })
        })
        .collect();

    let Some(first) = points.iter().position(|p| p.actual.is_some()) else {
        trace!(%mode, count = points.len(), "No readings for mode");
        return Vec::new();
    };
    let last = points
        .iter()
        .rposition(|p| p.actual.is_some())
        .unwrap_or(first);

    trace!(
        %mode,
        leading = first,
        trailing = points.len() - 1 - last,
        "Trimmed empty edges"
    );

    points
        .into_iter()
        .skip(first)
        .take(last - first + 1)
        .collect()
}
