// ABOUTME: Chart-ready data points and "change since" deltas
// ABOUTME: Derived, ephemeral values recomputed whenever their inputs change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One actual/trend pair for a single date in the active mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Origin of the underlying measurement
    pub source: String,
    /// Raw reading; `None` renders as a gap in the raw series
    pub actual: Option<f64>,
    /// Smoothed value, always present for a retained point
    pub trend: f64,
    /// The mode's interpolation flag
    pub is_interpolated: bool,
}

/// Change of the rounded trend value since `period` days ago
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    /// Lookback in calendar days (1, 7, 14 or 28)
    pub period: i64,
    /// Label such as "last week"
    pub description: String,
    /// Most recent rounded trend minus the anchor's rounded trend
    pub delta: f64,
}
