// ABOUTME: Dashboard aggregation running the full analytics pipeline for one mode
// ABOUTME: Bounded LRU memoization keyed by a content fingerprint of the inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

//! Dashboard snapshot and cache
//!
//! A snapshot is everything the dashboard renders for one mode on one day:
//! converted measurements, chart points, deltas and both slopes. Inputs are
//! treated as one atomic tuple, so a snapshot is never assembled from a mix
//! of old and new measurements.

use chrono::NaiveDate;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info_span};
use trendweight_analytics::conversion::convert_measurements;
use trendweight_analytics::data_points::compute_data_points;
use trendweight_analytics::deltas::compute_deltas_with_config;
use trendweight_analytics::slope::{
    compute_active_slope_with_config, compute_weight_slope_with_config,
};
use trendweight_analytics::AnalyticsConfig;
use trendweight_core::errors::AppResult;
use trendweight_core::models::{
    ApiComputedMeasurement, DataPoint, Delta, Measurement, Mode, ProfileData, WeightUnit,
};

/// Everything the analytics depend on, supplied together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardInputs {
    /// Backend-computed rows, kilograms and ratios
    pub measurements: Vec<ApiComputedMeasurement>,
    /// Owner profile; `None` displays pounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileData>,
}

impl DashboardInputs {
    /// Display unit implied by the profile
    #[must_use]
    pub fn unit(&self) -> WeightUnit {
        WeightUnit::for_profile(self.profile.as_ref())
    }

    /// Stable content fingerprint of the inputs together with `mode` and `today`
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs cannot be serialized
    pub fn fingerprint(&self, mode: Mode, today: NaiveDate) -> AppResult<String> {
        let mut hasher = Sha256::new();
        hasher.update(serde_json::to_vec(self)?);
        hasher.update(mode.as_str().as_bytes());
        hasher.update(today.to_string().as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}

/// Dashboard outputs for one mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Active mode
    pub mode: Mode,
    /// Calendar date the deltas were computed against
    pub today: NaiveDate,
    /// Display unit of every mass
    pub unit: WeightUnit,
    /// Converted measurements, input order
    pub measurements: Vec<Measurement>,
    /// Chart points for `mode`, ascending by date
    pub data_points: Vec<DataPoint>,
    /// "Change since" deltas for `mode`
    pub deltas: Vec<Delta>,
    /// Trend weight slope per point over the trailing measurements
    pub weight_slope: f64,
    /// Trend slope per point for `mode`
    pub active_slope: f64,
}

impl DashboardSnapshot {
    /// Run the pipeline with the default analytics policy
    #[must_use]
    pub fn compute(inputs: &DashboardInputs, mode: Mode, today: NaiveDate) -> Self {
        Self::compute_with_config(inputs, mode, today, &AnalyticsConfig::default())
    }

    /// Run the pipeline with an explicit policy
    #[must_use]
    pub fn compute_with_config(
        inputs: &DashboardInputs,
        mode: Mode,
        today: NaiveDate,
        config: &AnalyticsConfig,
    ) -> Self {
        let _span = info_span!("dashboard_snapshot", %mode, %today).entered();

        let measurements = convert_measurements(&inputs.measurements, inputs.profile.as_ref());
        let data_points = compute_data_points(mode, &measurements);
        let deltas = compute_deltas_with_config(&config.deltas, mode, &data_points, today);
        let weight_slope = compute_weight_slope_with_config(&config.slope, &measurements);
        let active_slope = compute_active_slope_with_config(&config.slope, mode, &data_points);

        debug!(
            measurements = measurements.len(),
            points = data_points.len(),
            deltas = deltas.len(),
            weight_slope,
            active_slope,
            "Computed dashboard snapshot"
        );

        Self {
            mode,
            today,
            unit: inputs.unit(),
            measurements,
            data_points,
            deltas,
            weight_slope,
            active_slope,
        }
    }
}

/// Hit and miss counters for a [`DashboardCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that ran the pipeline
    pub misses: u64,
    /// Snapshots currently held
    pub entries: usize,
}

struct CacheState {
    store: LruCache<String, Arc<DashboardSnapshot>>,
    hits: u64,
    misses: u64,
}

/// Bounded memoization of dashboard snapshots
///
/// Unchanged inputs for the same mode and day never re-run the analytics.
/// Entries are shared as `Arc` so a hit does not copy the series.
pub struct DashboardCache {
    config: AnalyticsConfig,
    state: Mutex<CacheState>,
}

impl DashboardCache {
    /// Default number of snapshots kept: every mode for a handful of views
    pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(32) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache holding at most `capacity` snapshots
    #[must_use]
    pub fn new(capacity: NonZeroUsize, config: AnalyticsConfig) -> Self {
        Self {
            config,
            state: Mutex::new(CacheState {
                store: LruCache::new(capacity),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Create a cache with the default capacity and policy
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Self::DEFAULT_CAPACITY, AnalyticsConfig::default())
    }

    /// Return the cached snapshot or compute and store it
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs cannot be fingerprinted
    pub fn snapshot(
        &self,
        inputs: &DashboardInputs,
        mode: Mode,
        today: NaiveDate,
    ) -> AppResult<Arc<DashboardSnapshot>> {
        let key = inputs.fingerprint(mode, today)?;

        {
            let mut state = self.lock();
            if let Some(hit) = state.store.get(&key).cloned() {
                state.hits += 1;
                drop(state);
                debug!(%mode, "Dashboard cache hit");
                return Ok(hit);
            }
            state.misses += 1;
        }

        // Computed outside the lock; a concurrent miss for the same key only
        // duplicates work
        let snapshot = Arc::new(DashboardSnapshot::compute_with_config(
            inputs,
            mode,
            today,
            &self.config,
        ));
        self.lock().store.put(key, Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drop every cached snapshot
    pub fn clear(&self) {
        self.lock().store.clear();
    }

    /// Current counters
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            entries: state.store.len(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // Cache state stays consistent even if a holder panicked
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DashboardCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}
