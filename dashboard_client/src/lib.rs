//! Market dashboard client.
//!
//! Polls the market backend for session status, the next holiday and quotes
//! for a locally persisted watchlist, and paints them to the terminal.
//!
//! Everything the dashboard shows is owned by a single event loop
//! ([`dashboard::Dashboard`]). HTTP calls run on short-lived worker threads
//! ([`fetch::Fetcher`]) that post their results back as [`event::Event`]s,
//! next to user commands read from stdin ([`input`]).
#![warn(missing_docs)]
pub mod api;
pub mod args;
pub mod dashboard;
pub mod event;
pub mod fetch;
pub mod input;
pub mod market;
pub mod refresher;
pub mod schedule;
pub mod screen;
pub mod sequence;
pub mod store;
pub mod view;
