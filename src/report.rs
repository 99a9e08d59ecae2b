// ABOUTME: Download-payload loading and report assembly for the command-line tool
// ABOUTME: Combines a dashboard snapshot with the export rows of one view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use trendweight_analytics::reconciliation::scale_readings;
use trendweight_analytics::AnalyticsConfig;
use trendweight_core::errors::{AppError, AppResult};
use trendweight_core::models::{
    ApiComputedMeasurement, Mode, ProfileData, ScaleReading, SourceData, ViewType,
};

use crate::dashboard::{DashboardInputs, DashboardSnapshot};

/// Backend download payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadPayload {
    /// Owner profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileData>,
    /// Backend-computed rows
    #[serde(default)]
    pub computed_measurements: Vec<ApiComputedMeasurement>,
    /// Raw readings per provider
    #[serde(default)]
    pub source_data: Vec<SourceData>,
}

impl DownloadPayload {
    /// Parse a payload from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid payload
    pub fn from_json(json: &str) -> AppResult<Self> {
        let payload: Self = serde_json::from_str(json)?;
        debug!(
            computed = payload.computed_measurements.len(),
            providers = payload.source_data.len(),
            "Parsed download payload"
        );
        Ok(payload)
    }

    /// Read and parse a payload file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
        })?;
        Self::from_json(&json)
    }

    /// Dashboard inputs carried by this payload
    #[must_use]
    pub fn dashboard_inputs(&self) -> DashboardInputs {
        DashboardInputs {
            measurements: self.computed_measurements.clone(),
            profile: self.profile.clone(),
        }
    }
}

/// What to include in a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Mode for chart points, deltas and active slope
    pub mode: Mode,
    /// Export view for the reading rows
    pub view: ViewType,
    /// Order reading rows newest first
    pub newest_first: bool,
    /// Date deltas are computed against
    pub today: NaiveDate,
}

/// Snapshot plus export rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Dashboard outputs for the requested mode
    pub dashboard: DashboardSnapshot,
    /// Export view identifier
    pub view: String,
    /// Export rows for the requested view
    pub readings: Vec<ScaleReading>,
}

/// Build a report from a payload
#[must_use]
pub fn build_report(
    payload: &DownloadPayload,
    options: &ReportOptions,
    config: &AnalyticsConfig,
) -> Report {
    let inputs = payload.dashboard_inputs();
    let dashboard =
        DashboardSnapshot::compute_with_config(&inputs, options.mode, options.today, config);

    if let ViewType::Provider(provider) = &options.view {
        if !payload.source_data.iter().any(|s| &s.source == provider) {
            warn!(%provider, "Provider not present in payload");
        }
    }

    let readings = scale_readings(
        &options.view,
        &payload.source_data,
        &dashboard.measurements,
        dashboard.unit,
        options.newest_first,
    );

    Report {
        dashboard,
        view: options.view.to_string(),
        readings,
    }
}
