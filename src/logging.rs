// ABOUTME: Structured logging setup for the TrendWeight analytics binaries
// ABOUTME: Env-driven level and format selection on top of tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight

//! Logging configuration
//!
//! Logs always go to stderr so report output on stdout stays machine-readable.

use anyhow::Result;
use std::env;
use std::io;
use std::str::FromStr;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crates whose spans and events are shown at the configured level
const OWN_TARGETS: [&str; 3] = ["trendweight", "trendweight_analytics", "trendweight_core"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name attached to the startup event
    pub service_name: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log shippers
    Json,
    /// Multi-line human format
    Pretty,
    /// Single-line human format
    #[default]
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::default(),
            include_location: false,
            service_name: env!("CARGO_PKG_NAME").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from `RUST_LOG`, `LOG_FORMAT` and
    /// `LOG_INCLUDE_LOCATION`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.format),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
        }
    }

    /// Raise the level for `-v` style flags; 1 is debug, 2 or more is trace
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        match verbosity {
            0 => {}
            1 => self.level = "debug".into(),
            _ => self.level = "trace".into(),
        }
        self
    }

    /// Build the filter
    ///
    /// A bare level applies to this workspace's crates while everything else
    /// stays at warn. Anything else is treated as a full `RUST_LOG` directive.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let Ok(own_level) = Level::from_str(self.level.trim()) else {
            return EnvFilter::new(&self.level);
        };
        OWN_TARGETS
            .iter()
            .fold(EnvFilter::new("warn"), |filter, target| {
                match format!("{target}={own_level}").parse() {
                    Ok(directive) => filter.add_directive(directive),
                    Err(_) => filter,
                }
            })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let layer = fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_target(true)
            .with_writer(io::stderr);

        match self.format {
            LogFormat::Json => registry.with(layer.json()).try_init()?,
            LogFormat::Pretty => registry.with(layer.pretty()).try_init()?,
            LogFormat::Compact => registry.with(layer.compact()).try_init()?,
        }

        debug!(
            service = %self.service_name,
            version = env!("CARGO_PKG_VERSION"),
            level = %self.level,
            "Logging initialized"
        );
        Ok(())
    }
}
