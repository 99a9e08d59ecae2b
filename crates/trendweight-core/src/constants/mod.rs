// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit factors, provider identifiers, and trend analytics policy values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

//! Constants module
//!
//! Constants are grouped by domain. The analytics policies live here so the
//! exact numbers are reviewed in one place instead of being scattered through
//! the algorithms.

/// Unit conversion constants
pub mod units;

/// Delta and regression window policies
pub mod analytics;

/// Data source identifiers
pub mod sources {
    /// Source label attached to every backend-computed measurement
    pub const COMPUTED: &str = "computed";
}
