//!
//! Common types and utilities shared by the dashboard client and its tests.
//!
//! This crate aggregates:
//! - `error` — unified error type `DashboardError` used across the workspace.
//! - `result` — handy `Result<T, DashboardError>` alias.
//! - `model` — JSON payloads returned by the market backend.
//! - `symbol` — normalized watchlist symbols.
//! - `format` — countdown and quote display formatting.
//! - `command` — interactive commands typed by the user.
#![warn(missing_docs)]
pub mod command;
pub mod error;
pub mod format;
pub mod model;
pub mod result;
pub mod symbol;

pub use command::UserCommand;
pub use error::DashboardError;
pub use result::Result;
pub use symbol::Symbol;
