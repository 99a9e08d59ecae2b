// ABOUTME: User profile subset consumed by the analytics engine
// ABOUTME: Supplies the metric/imperial preference that drives unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

use crate::constants::units::POUNDS_PER_KILOGRAM;
use serde::{Deserialize, Serialize};

/// Profile fields the engine reads; the rest of the profile is ignored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    /// Display name, carried through untouched
    #[serde(default)]
    pub first_name: String,
    /// Kilograms when true, pounds otherwise
    pub use_metric: bool,
}

impl ProfileData {
    /// Unit the profile asks for
    #[must_use]
    pub const fn weight_unit(&self) -> WeightUnit {
        if self.use_metric {
            WeightUnit::Kilograms
        } else {
            WeightUnit::Pounds
        }
    }
}

/// Display unit for weight-family values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Metric
    Kilograms,
    /// Imperial, used when no profile is available
    #[default]
    Pounds,
}

impl WeightUnit {
    /// Resolve the unit for an optional profile
    #[must_use]
    pub fn for_profile(profile: Option<&ProfileData>) -> Self {
        profile.map(ProfileData::weight_unit).unwrap_or_default()
    }

    /// Factor turning kilograms into this unit
    #[must_use]
    pub const fn factor_from_kilograms(self) -> f64 {
        match self {
            Self::Kilograms => 1.0,
            Self::Pounds => POUNDS_PER_KILOGRAM,
        }
    }

    /// Convert a kilogram value into this unit
    #[must_use]
    pub fn from_kilograms(self, kilograms: f64) -> f64 {
        kilograms * self.factor_from_kilograms()
    }

    /// Short unit suffix
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Pounds => "lb",
        }
    }
}
