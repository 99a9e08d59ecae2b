// ABOUTME: Trend analytics engine turning measurements into chart points, deltas, and slopes
// ABOUTME: Pure, synchronous functions over immutable inputs; callers own memoization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

#![deny(unsafe_code)]

//! # TrendWeight Analytics
//!
//! Data flows leaf-first through five components:
//!
//! 1. [`conversion`] turns backend rows into display-unit [`Measurement`]s
//! 2. [`data_points`] projects measurements for one [`Mode`] and trims empty edges
//! 3. [`deltas`] computes "change since N days ago" with exact-date anchors
//! 4. [`slope`] fits a short least-squares line over the trailing trend values
//! 5. [`reconciliation`] builds the sorted export rows, independent of the chart path
//!
//! No function here performs I/O or fails at runtime; sparse input simply
//! produces fewer deltas or a zero slope.
//!
//! [`Measurement`]: trendweight_core::models::Measurement
//! [`Mode`]: trendweight_core::models::Mode

/// Tunable analytics parameters with validated defaults
pub mod config;
/// Backend payload to display-unit measurement conversion
pub mod conversion;
/// Mode-specific chart point projection
pub mod data_points;
/// "Change since" deltas with density guards
pub mod deltas;
/// Export-view reading reconciliation and sorting
pub mod reconciliation;
/// Least-squares trend slopes
pub mod slope;

pub use config::{AnalyticsConfig, ConfigError, DeltaConfig, SlopeConfig};
pub use conversion::convert_measurements;
pub use data_points::compute_data_points;
pub use deltas::{compute_deltas, compute_deltas_today, compute_deltas_with_config};
pub use reconciliation::scale_readings;
pub use slope::{compute_active_slope, compute_weight_slope, least_squares_slope};
