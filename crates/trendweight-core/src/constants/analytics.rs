// ABOUTME: Numeric policies for deltas and slopes: windows, density guards, rounding
// ABOUTME: These values are product decisions and must not drift between releases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

/// A series whose most recent point is older than this many days yields no deltas
pub const MAX_STALENESS_DAYS: i64 = 2;

/// The "yesterday" delta needs the most recent point to be at most this old
pub const YESTERDAY_MAX_AGE_DAYS: i64 = 1;

/// One row of the delta window table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaWindow {
    /// Calendar distance in days between the most recent point and the anchor
    pub period: i64,
    /// Minimum index of the anchor in the most-recent-first series
    pub min_index: usize,
    /// Label shown next to the delta
    pub description: &'static str,
}

/// Yesterday delta: calendar-adjacent second point
pub const YESTERDAY: DeltaWindow = DeltaWindow {
    period: 1,
    min_index: 1,
    description: "yesterday",
};

/// Lookback windows beyond yesterday, in emission order
pub const LOOKBACK_WINDOWS: [DeltaWindow; 3] = [
    DeltaWindow {
        period: 7,
        min_index: 4,
        description: "last week",
    },
    DeltaWindow {
        period: 14,
        min_index: 9,
        description: "two weeks ago",
    },
    DeltaWindow {
        period: 28,
        min_index: 19,
        description: "a month ago",
    },
];

/// Decimal places kept before differencing weight, fat mass and lean mass trends
pub const MASS_ROUNDING_DECIMALS: i32 = 1;

/// Decimal places kept before differencing fat ratios (0.1 percentage point)
pub const RATIO_ROUNDING_DECIMALS: i32 = 3;

/// Trailing measurements used for the weight slope
pub const WEIGHT_SLOPE_WINDOW: usize = 14;

/// Trailing chart points used for the active slope in weight mode
pub const WEIGHT_MODE_SLOPE_WINDOW: usize = 14;

/// Trailing chart points used for the active slope in body-composition modes
pub const COMPOSITION_MODE_SLOPE_WINDOW: usize = 28;

/// Fewest points a regression accepts
pub const MIN_REGRESSION_POINTS: usize = 2;
