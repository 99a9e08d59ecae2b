// ABOUTME: Command-line report over a TrendWeight download payload
// ABOUTME: Prints chart points, deltas, slopes and export rows as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrendWeight
//!
//! Usage:
//! ```bash
//! # Weight dashboard for today, computed export rows
//! trendweight-report download.json
//!
//! # Fat percent as of a fixed date, Withings rows newest first
//! trendweight-report download.json --mode fatpercent --view withings \
//!     --newest-first --today 2024-01-16
//!
//! # Read the payload from stdin
//! cat download.json | trendweight-report -
//! ```

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use trendweight::logging::LoggingConfig;
use trendweight::report::{build_report, DownloadPayload, ReportOptions};
use trendweight_analytics::AnalyticsConfig;
use trendweight_core::models::{Mode, ViewType};

#[derive(Parser)]
#[command(
    name = "trendweight-report",
    about = "TrendWeight trend analytics report",
    long_about = "Compute dashboard statistics and export rows from a TrendWeight download payload."
)]
struct Cli {
    /// Payload file, or `-` for stdin
    payload: PathBuf,

    /// Dashboard mode: weight, fatpercent, fatmass or leanmass
    #[arg(long, short = 'm', default_value = "weight")]
    mode: Mode,

    /// Export view: `computed` or a provider id such as `withings`
    #[arg(long, default_value = "computed")]
    view: ViewType,

    /// Order export rows newest first
    #[arg(long)]
    newest_first: bool,

    /// Compute deltas as of this date instead of the local date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Compact single-line JSON
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

fn read_payload(path: &Path) -> Result<DownloadPayload> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .context("reading payload from stdin")?;
        return Ok(DownloadPayload::from_json(&json)?);
    }
    Ok(DownloadPayload::from_path(path)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::from_env()
        .with_verbosity(cli.verbose)
        .init()?;

    // Validates environment overrides once, before any computation
    let config = AnalyticsConfig::load()?;
    info!(?config, "Analytics configuration loaded");

    let payload = read_payload(&cli.payload)?;
    let options = ReportOptions {
        mode: cli.mode,
        view: cli.view,
        newest_first: cli.newest_first,
        today: cli.today.unwrap_or_else(|| Local::now().date_naive()),
    };
    info!(
        mode = options.mode.label(),
        view = %options.view,
        today = %options.today,
        "Building report"
    );
    let report = build_report(&payload, &options, &config);

    let mut stdout = io::stdout().lock();
    if cli.compact {
        serde_json::to_writer(&mut stdout, &report)?;
    } else {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
    }
    writeln!(stdout)?;
    Ok(())
}
