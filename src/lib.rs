// ABOUTME: Main library entry point for the TrendWeight trend analytics engine
// ABOUTME: Dashboard aggregation, export reports, and logging on top of the analytics crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

#![deny(unsafe_code)]

//! # TrendWeight
//!
//! Turns backend-precomputed weight and body-composition measurements into
//! what a weight-tracking dashboard shows: per-mode chart points, "change
//! since" deltas and short-term trend slopes, plus the sorted rows behind the
//! data-export view.
//!
//! The algorithms live in `trendweight-analytics` and the shared types in
//! `trendweight-core`; this crate wires them into a memoized dashboard
//! snapshot and a command-line report.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use trendweight::dashboard::{DashboardInputs, DashboardSnapshot};
//! use trendweight::models::Mode;
//!
//! let inputs = DashboardInputs::default();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap_or_default();
//! let snapshot = DashboardSnapshot::compute(&inputs, Mode::Weight, today);
//! assert!(snapshot.deltas.is_empty());
//! assert_eq!(snapshot.weight_slope, 0.0);
//! ```

/// Dashboard snapshot computation and memoization
pub mod dashboard;
/// Logging configuration and structured logging setup
pub mod logging;
/// Download payload loading and report assembly
pub mod report;

pub use trendweight_analytics as analytics;
pub use trendweight_core::{constants, errors, models};
