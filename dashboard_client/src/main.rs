//! Market Dashboard — a terminal client that polls the market backend for
//! session status, the next market holiday and quotes for a locally persisted
//! watchlist, and repaints them as they change.
//!
//! Usage example (CLI):
//! ```bash
//! dashboard_client --api-base http://127.0.0.1:8000/api --data-dir ~/.dashboard 2>dashboard.log
//! ```
//!
//! Type `add AAPL`, `rm AAPL` (or `rm 1` for the first card), `refresh` or
//! `quit` while it runs. Logs go to stderr; set `RUST_LOG=debug` for traffic.
#![warn(missing_docs)]
use std::io;
use std::sync::Arc;

use clap::Parser;
use crossbeam_channel::bounded;
use dashboard_client::api::HttpMarketApi;
use dashboard_client::args::Args;
use dashboard_client::dashboard::Dashboard;
use dashboard_client::input::spawn_stdin_reader;
use dashboard_client::screen::Screen;
use dashboard_client::store::{FileStore, WatchlistStore};
use dashboard_common::{DashboardError, Result};
use log::info;

fn main() -> Result<(), DashboardError> {
    init_logger();
    let args = Args::parse();

    let api = HttpMarketApi::new(&args.api_base, args.request_timeout())?;
    info!("Backend: {}", api.base_url());

    let data_dir = args.data_dir();
    let store = WatchlistStore::new(FileStore::open(&data_dir)?);
    info!("Watchlist stored in {}", data_dir.display());

    let mut dashboard = Dashboard::new(Arc::new(api), store, args.refresh_config())
        .with_screen(Screen::new(!args.no_clear));

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down dashboard...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| DashboardError::Io(io::Error::other(e)))?;

    spawn_stdin_reader(dashboard.events_sender())?;

    info!("Dashboard is running. Press Ctrl+C or type `quit` to exit.");
    dashboard.run(shutdown_rx)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
