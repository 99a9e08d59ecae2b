// ABOUTME: Dashboard mode selecting which measured quantity is charted and analyzed
// ABOUTME: Parses and serializes as weight, fatpercent, fatmass, or leanmass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which measured quantity is being analyzed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Body weight
    #[default]
    Weight,
    /// Body fat as a 0-1 ratio
    FatPercent,
    /// Fat mass in the display unit
    FatMass,
    /// Lean mass in the display unit
    LeanMass,
}

impl Mode {
    /// All modes in display order
    pub const ALL: [Self; 4] = [Self::Weight, Self::FatPercent, Self::FatMass, Self::LeanMass];

    /// Wire identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::FatPercent => "fatpercent",
            Self::FatMass => "fatmass",
            Self::LeanMass => "leanmass",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::FatPercent => "Fat %",
            Self::FatMass => "Fat Mass",
            Self::LeanMass => "Lean Mass",
        }
    }

    /// True for the three modes derived from body-fat readings
    #[must_use]
    pub const fn is_body_composition(self) -> bool {
        !matches!(self, Self::Weight)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown mode '{s}'")))
    }
}
