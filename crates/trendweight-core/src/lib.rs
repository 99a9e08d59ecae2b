// ABOUTME: Core types and constants for the TrendWeight trend analytics engine
// ABOUTME: Foundation crate with measurement models, error handling, and policy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

#![deny(unsafe_code)]

//! # TrendWeight Core
//!
//! Foundation crate providing the shared data model for the TrendWeight
//! analytics engine. This crate changes rarely so the algorithm crate and the
//! root package can compile against a stable set of types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit factors, provider identifiers, and the numeric policies
//!   (delta windows, regression windows) the analytics depend on
//! - **models**: Backend payload rows, display measurements, chart points, deltas,
//!   raw scale readings, and the user profile

/// Unified error type with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Measurement, chart, and export data models
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
