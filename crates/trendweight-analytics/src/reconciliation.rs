// ABOUTME: Builds the flat, sorted reading rows behind the data-export view
// ABOUTME: Either the unified computed series or one provider's raw readings, never merged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

//! Raw Reading Reconciler
//!
//! This path is independent of the chart pipeline: it neither trims nor
//! projects, it only reshapes and orders rows. Provider readings on the same
//! date are ordered by time of day; a reading without a time sorts before
//! timed readings of the same date.

use std::cmp::Ordering;

use tracing::debug;
use trendweight_core::models::{Measurement, ScaleReading, SourceData, ViewType, WeightUnit};

/// Build export rows for `view`
///
/// `measurements` must already be converted to `unit`. An unknown provider
/// or a provider that never synced yields an empty list. Rows with equal
/// keys keep their input order in both directions.
#[must_use]
pub fn scale_readings(
    view: &ViewType,
    sources: &[SourceData],
    measurements: &[Measurement],
    unit: WeightUnit,
    sort_newest_first: bool,
) -> Vec<ScaleReading> {
    let mut rows = match view {
        ViewType::Computed => computed_rows(measurements),
        ViewType::Provider(provider) => provider_rows(provider, sources, unit),
    };

    rows.sort_by(|a, b| {
        let ordering = chronological(a, b);
        if sort_newest_first {
            ordering.reverse()
        } else {
            ordering
        }
    });

    debug!(view = %view, rows = rows.len(), sort_newest_first, "Built scale readings");
    rows
}

fn computed_rows(measurements: &[Measurement]) -> Vec<ScaleReading> {
    measurements
        .iter()
        .map(|m| ScaleReading {
            date: m.date,
            weight: m.actual_weight,
            trend: Some(m.trend_weight),
            fat_ratio: m.actual_fat_percent,
            fat_trend: m.trend_fat_percent,
            weight_is_interpolated: Some(m.weight_is_interpolated),
            fat_is_interpolated: Some(m.fat_is_interpolated),
            ..ScaleReading::default()
        })
        .collect()
}

fn provider_rows(provider: &str, sources: &[SourceData], unit: WeightUnit) -> Vec<ScaleReading> {
    let Some(readings) = sources
        .iter()
        .find(|data| data.source == provider)
        .and_then(|data| data.measurements.as_deref())
    else {
        return Vec::new();
    };

    readings
        .iter()
        .map(|raw| ScaleReading {
            date: raw.date,
            time: raw.time,
            // A zero weight is a provider placeholder, not a reading
            weight: raw
                .weight
                .filter(|kilograms| *kilograms != 0.0)
                .map(|kilograms| unit.from_kilograms(kilograms)),
            fat_ratio: raw.fat_ratio,
            provider: Some(provider.to_owned()),
            ..ScaleReading::default()
        })
        .collect()
}

fn chronological(a: &ScaleReading, b: &ScaleReading) -> Ordering {
    a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use trendweight_core::models::RawMeasurement;

    #[test]
    fn test_untimed_reading_sorts_before_timed_on_same_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let untimed = ScaleReading {
            date,
            ..ScaleReading::default()
        };
        let timed = ScaleReading {
            date,
            time: NaiveTime::from_hms_opt(6, 0, 0),
            ..ScaleReading::default()
        };
        assert_eq!(chronological(&untimed, &timed), Ordering::Less);
    }

    #[test]
    fn test_zero_weight_becomes_missing() {
        let sources = vec![SourceData {
            source: "manual".into(),
            last_update: None,
            measurements: Some(vec![RawMeasurement {
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                time: None,
                weight: Some(0.0),
                fat_ratio: None,
            }]),
        }];
        let rows = provider_rows("manual", &sources, WeightUnit::Kilograms);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].weight, None);
    }
}
