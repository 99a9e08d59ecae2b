// ABOUTME: Raw per-provider scale readings and flat export rows for the download view
// ABOUTME: Provider identifiers are opaque keys owned by the surrounding application
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

use crate::constants::sources;
use crate::errors::AppError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single timestamped reading reported by a scale provider, kilograms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeasurement {
    /// Calendar date of the reading
    pub date: NaiveDate,
    /// Time of day (`HH:MM:SS`), when the provider reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Body fat ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_ratio: Option<f64>,
}

/// All readings from one provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceData {
    /// Provider identifier, e.g. `withings`
    pub source: String,
    /// Last successful sync
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
    /// Readings, absent when the provider has never synced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Vec<RawMeasurement>>,
}

/// Flat row shown in the export table
///
/// Computed rows fill the trend and interpolation fields; provider rows fill
/// `time` and `provider` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleReading {
    /// Calendar date
    pub date: NaiveDate,
    /// Time of day for provider readings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Weight in the display unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Trend weight in the display unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<f64>,
    /// Body fat ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_ratio: Option<f64>,
    /// Smoothed body fat ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_trend: Option<f64>,
    /// Weight interpolation flag, computed rows only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_is_interpolated: Option<bool>,
    /// Fat interpolation flag, computed rows only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_is_interpolated: Option<bool>,
    /// Provider identifier, provider rows only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// Which rows the export view shows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewType {
    /// The unified, backend-computed series
    Computed,
    /// Raw readings from one provider
    Provider(String),
}

impl ViewType {
    /// Identifier as used in URLs and settings
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Computed => sources::COMPUTED,
            Self::Provider(id) => id,
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty() {
            return Err(AppError::invalid_input("View type must not be empty"));
        }
        if id == sources::COMPUTED {
            Ok(Self::Computed)
        } else {
            Ok(Self::Provider(id.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_type_parsing() {
        assert_eq!("computed".parse::<ViewType>().unwrap(), ViewType::Computed);
        assert_eq!(
            "withings".parse::<ViewType>().unwrap(),
            ViewType::Provider("withings".into())
        );
        assert!("  ".parse::<ViewType>().is_err());
    }

    #[test]
    fn test_raw_measurement_parses_wire_format() {
        let json = r#"{"date":"2024-01-15","time":"06:30:00","weight":75.5,"fatRatio":0.18}"#;
        let reading: RawMeasurement = serde_json::from_str(json).unwrap();
        assert_eq!(reading.time, NaiveTime::from_hms_opt(6, 30, 0));
        assert_eq!(reading.fat_ratio, Some(0.18));
    }
}
