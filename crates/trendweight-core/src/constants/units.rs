// ABOUTME: Unit conversion constants for weight measurements
// ABOUTME: Provides named constants to eliminate magic numbers in conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

/// Pounds per kilogram; the backend stores every mass in kilograms
pub const POUNDS_PER_KILOGRAM: f64 = 2.204_622_62;
