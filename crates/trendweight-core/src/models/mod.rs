// ABOUTME: Data models for measurements, chart points, deltas, and export rows
// ABOUTME: Re-exports all model types from submodules for convenient access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

//! # Data Models
//!
//! Backend payload rows arrive as [`ApiComputedMeasurement`] (kilograms and
//! ratios) and are converted into display-unit [`Measurement`]s. Everything
//! downstream ([`DataPoint`], [`Delta`], [`ScaleReading`]) is derived and never
//! mutated in place.

mod chart;
mod measurement;
mod mode;
mod profile;
mod reading;

pub use chart::{DataPoint, Delta};
pub use measurement::{ApiComputedMeasurement, Measurement};
pub use mode::Mode;
pub use profile::{ProfileData, WeightUnit};
pub use reading::{RawMeasurement, ScaleReading, SourceData, ViewType};
