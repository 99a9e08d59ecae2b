// ABOUTME: Converts backend-computed measurements into display-unit measurements
// ABOUTME: Applies the metric/imperial preference and derives fat and lean mass series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

//! Unit/Mode Converter
//!
//! The backend stores every mass in kilograms and body fat as a ratio. This
//! module scales the weight family into the profile's unit and fills in the
//! fat-mass and lean-mass pairs. Trend masses come from the backend's own
//! moving averages when present; smoothing the masses separately avoids the
//! compounding artifacts of multiplying two already-smoothed series.

use tracing::debug;
use trendweight_core::constants::sources;
use trendweight_core::models::{ApiComputedMeasurement, Measurement, ProfileData, WeightUnit};

/// Convert backend rows to display measurements for the given profile
///
/// A missing profile converts to pounds. Optional body-fat fields pass
/// through as `None`; nothing here fails.
#[must_use]
pub fn convert_measurements(
    computed: &[ApiComputedMeasurement],
    profile: Option<&ProfileData>,
) -> Vec<Measurement> {
    let unit = WeightUnit::for_profile(profile);
    debug!(
        count = computed.len(),
        unit = unit.abbreviation(),
        "Converting computed measurements"
    );
    computed
        .iter()
        .map(|row| convert_measurement(row, unit))
        .collect()
}

/// Convert one backend row into `unit`
#[must_use]
pub fn convert_measurement(row: &ApiComputedMeasurement, unit: WeightUnit) -> Measurement {
    let actual_weight = unit.from_kilograms(row.actual_weight);
    let trend_weight = unit.from_kilograms(row.trend_weight);

    // A zero ratio is a missing body-fat reading, not a lean-only body
    let actual_ratio = row.actual_fat_percent.filter(|ratio| *ratio != 0.0);
    let trend_ratio = row.trend_fat_percent.filter(|ratio| *ratio != 0.0);

    let actual_fat_mass = actual_ratio.map(|ratio| actual_weight * ratio);
    let actual_lean_mass = actual_ratio.map(|ratio| actual_weight * (1.0 - ratio));

    let trend_fat_mass = row.trend_fat_mass.map_or_else(
        || trend_ratio.map(|ratio| trend_weight * ratio),
        |kilograms| Some(unit.from_kilograms(kilograms)),
    );
    let trend_lean_mass = row.trend_lean_mass.map_or_else(
        || trend_ratio.map(|ratio| trend_weight * (1.0 - ratio)),
        |kilograms| Some(unit.from_kilograms(kilograms)),
    );

    Measurement {
        date: row.date,
        source: sources::COMPUTED.to_owned(),
        actual_weight: Some(actual_weight),
        trend_weight,
        actual_fat_mass,
        trend_fat_mass,
        actual_fat_percent: row.actual_fat_percent,
        trend_fat_percent: row.trend_fat_percent,
        actual_lean_mass,
        trend_lean_mass,
        weight_is_interpolated: row.weight_is_interpolated,
        fat_is_interpolated: row.fat_is_interpolated,
    }
}
