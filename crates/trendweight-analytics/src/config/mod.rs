// ABOUTME: Analytics configuration for delta freshness, rounding, and regression windows
// ABOUTME: Defaults reproduce the product policy; environment overrides are validated on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

//! Analytics Configuration
//!
//! `AnalyticsConfig::default()` is the shipped policy. Deployments may tune the
//! freshness guard and the regression windows through environment variables;
//! `load()` rejects values that would make the statistics meaningless.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;
use trendweight_core::constants::analytics::{
    COMPOSITION_MODE_SLOPE_WINDOW, MASS_ROUNDING_DECIMALS, MAX_STALENESS_DAYS,
    MIN_REGRESSION_POINTS, RATIO_ROUNDING_DECIMALS, WEIGHT_MODE_SLOPE_WINDOW,
    WEIGHT_SLOPE_WINDOW, YESTERDAY_MAX_AGE_DAYS,
};

/// Environment variable overriding the delta staleness guard
pub const ENV_MAX_STALENESS_DAYS: &str = "TRENDWEIGHT_DELTA_MAX_STALENESS_DAYS";
/// Environment variable overriding the weight slope windows
pub const ENV_WEIGHT_WINDOW: &str = "TRENDWEIGHT_SLOPE_WEIGHT_WINDOW";
/// Environment variable overriding the body-composition slope window
pub const ENV_COMPOSITION_WINDOW: &str = "TRENDWEIGHT_SLOPE_COMPOSITION_WINDOW";

/// Top-level analytics configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Delta calculator settings
    pub deltas: DeltaConfig,
    /// Slope estimator settings
    pub slope: SlopeConfig,
}

/// Delta calculator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaConfig {
    /// Most recent point older than this (days) suppresses all deltas
    pub max_staleness_days: i64,
    /// Most recent point older than this (days) suppresses the yesterday delta
    pub yesterday_max_age_days: i64,
    /// Decimals kept before differencing weight and mass trends
    pub mass_rounding_decimals: i32,
    /// Decimals kept before differencing fat ratios
    pub ratio_rounding_decimals: i32,
}

/// Slope estimator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlopeConfig {
    /// Trailing measurements for the weight slope
    pub weight_window: usize,
    /// Trailing chart points for the active slope in weight mode
    pub weight_mode_window: usize,
    /// Trailing chart points for the active slope in body-composition modes
    pub composition_mode_window: usize,
}

impl Default for DeltaConfig {
    fn default() -> Self {
        Self {
            max_staleness_days: MAX_STALENESS_DAYS,
            yesterday_max_age_days: YESTERDAY_MAX_AGE_DAYS,
            mass_rounding_decimals: MASS_ROUNDING_DECIMALS,
            ratio_rounding_decimals: RATIO_ROUNDING_DECIMALS,
        }
    }
}

impl Default for SlopeConfig {
    fn default() -> Self {
        Self {
            weight_window: WEIGHT_SLOPE_WINDOW,
            weight_mode_window: WEIGHT_MODE_SLOPE_WINDOW,
            composition_mode_window: COMPOSITION_MODE_SLOPE_WINDOW,
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the
    /// resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a guard is negative, the yesterday guard exceeds the
    /// staleness guard, a rounding precision is out of range, or a regression
    /// window is too small to fit a line
    pub fn validate(&self) -> Result<(), ConfigError> {
        let deltas = &self.deltas;
        if deltas.max_staleness_days < 0 || deltas.yesterday_max_age_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "delta freshness guards must not be negative",
            ));
        }
        if deltas.yesterday_max_age_days > deltas.max_staleness_days {
            return Err(ConfigError::InvalidRange(
                "yesterday_max_age_days must be <= max_staleness_days",
            ));
        }
        if !(0..=6).contains(&deltas.mass_rounding_decimals)
            || !(0..=6).contains(&deltas.ratio_rounding_decimals)
        {
            return Err(ConfigError::ValueOutOfRange(
                "rounding decimals must be between 0 and 6",
            ));
        }

        let slope = &self.slope;
        if slope.weight_window < MIN_REGRESSION_POINTS
            || slope.weight_mode_window < MIN_REGRESSION_POINTS
            || slope.composition_mode_window < MIN_REGRESSION_POINTS
        {
            return Err(ConfigError::ValueOutOfRange(
                "slope windows need at least two points",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
            debug!(variable = env_var_name, value = %val.trim(), "Applied analytics override");
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_MAX_STALENESS_DAYS, &mut self.deltas.max_staleness_days)?;

        // One knob drives both weight windows so they cannot drift apart
        let mut weight_window = self.slope.weight_window;
        Self::apply_env_var(ENV_WEIGHT_WINDOW, &mut weight_window)?;
        self.slope.weight_window = weight_window;
        self.slope.weight_mode_window = weight_window;

        Self::apply_env_var(
            ENV_COMPOSITION_WINDOW,
            &mut self.slope.composition_mode_window,
        )?;
        Ok(self)
    }
}
