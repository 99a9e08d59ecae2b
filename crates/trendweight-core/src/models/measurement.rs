// ABOUTME: Backend-computed measurement rows and their display-unit counterpart
// ABOUTME: One row per calendar date, already deduplicated and smoothed upstream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Measurement row as delivered by the backend
///
/// Masses are kilograms and body fat is a 0-1 ratio. `trend_fat_mass` and
/// `trend_lean_mass` are independent moving averages when the backend provides
/// them; older payloads omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiComputedMeasurement {
    /// Calendar date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Raw or filled weight reading, kilograms
    pub actual_weight: f64,
    /// Smoothed weight, kilograms
    pub trend_weight: f64,
    /// Weight was interpolated between real readings
    #[serde(default)]
    pub weight_is_interpolated: bool,
    /// Body fat was interpolated between real readings
    #[serde(default)]
    pub fat_is_interpolated: bool,
    /// Raw body fat ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_fat_percent: Option<f64>,
    /// Smoothed body fat ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_fat_percent: Option<f64>,
    /// Smoothed fat mass, kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_fat_mass: Option<f64>,
    /// Smoothed lean mass, kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_lean_mass: Option<f64>,
}

/// Display-ready measurement in the user's unit system
///
/// Immutable once built; rebuilt whenever the upstream payload or the unit
/// preference changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Calendar date
    pub date: NaiveDate,
    /// Origin of the row
    pub source: String,
    /// Raw weight reading; `None` when the day only has a trend value
    pub actual_weight: Option<f64>,
    /// Smoothed weight
    pub trend_weight: f64,
    /// Raw fat mass
    pub actual_fat_mass: Option<f64>,
    /// Smoothed fat mass
    pub trend_fat_mass: Option<f64>,
    /// Raw body fat ratio
    pub actual_fat_percent: Option<f64>,
    /// Smoothed body fat ratio
    pub trend_fat_percent: Option<f64>,
    /// Raw lean mass
    pub actual_lean_mass: Option<f64>,
    /// Smoothed lean mass
    pub trend_lean_mass: Option<f64>,
    /// Weight was interpolated
    pub weight_is_interpolated: bool,
    /// Body fat was interpolated
    pub fat_is_interpolated: bool,
}

impl Measurement {
    /// Weight-only measurement with no body-composition data
    #[must_use]
    pub fn weight_only(
        date: NaiveDate,
        source: impl Into<String>,
        actual_weight: Option<f64>,
        trend_weight: f64,
    ) -> Self {
        Self {
            date,
            source: source.into(),
            actual_weight,
            trend_weight,
            actual_fat_mass: None,
            trend_fat_mass: None,
            actual_fat_percent: None,
            trend_fat_percent: None,
            actual_lean_mass: None,
            trend_lean_mass: None,
            weight_is_interpolated: false,
            fat_is_interpolated: false,
        }
    }
}
