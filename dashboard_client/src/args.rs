//! Command-line arguments for the dashboard.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::dashboard::RefreshConfig;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the market backend API.
    #[clap(long, default_value = "http://127.0.0.1:8000/api")]
    pub api_base: String,

    /// Directory holding the persisted watchlist (`watchlist.json`).
    #[clap(long, default_value = ".")]
    pub data_dir: String,

    /// Seconds between session status refreshes.
    #[clap(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    pub market_interval_secs: u64,

    /// Seconds between holiday refreshes.
    #[clap(long, default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..))]
    pub holiday_interval_secs: u64,

    /// Seconds between watchlist quote refreshes.
    #[clap(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    pub quote_interval_secs: u64,

    /// Give up on a request after this many seconds. Requests wait forever by default.
    #[clap(long)]
    pub request_timeout_secs: Option<u64>,

    /// Append frames instead of clearing the terminal before each one.
    #[clap(long)]
    pub no_clear: bool,
}

impl Args {
    /// Polling periods from the CLI.
    pub fn refresh_config(&self) -> RefreshConfig {
        RefreshConfig {
            market_every: Duration::from_secs(self.market_interval_secs),
            holidays_every: Duration::from_secs(self.holiday_interval_secs),
            quotes_every: Duration::from_secs(self.quote_interval_secs),
            ..RefreshConfig::default()
        }
    }

    /// Per-request timeout, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Data directory with surrounding whitespace and matching quotes removed.
    ///
    /// This allows passing Windows paths in quotes without breaking parsing.
    pub fn data_dir(&self) -> PathBuf {
        let trimmed = self.data_dir.trim();
        let no_quotes = trimmed
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(trimmed);
        PathBuf::from(no_quotes)
    }
}
