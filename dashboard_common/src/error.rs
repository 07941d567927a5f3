//! Error types shared across the workspace.
//!
//! The `DashboardError` enum unifies network, decoding, storage and input
//! failures, allowing crates to propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the dashboard crates.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The HTTP request itself failed (connection refused, DNS, reset, ...).
    #[error("Request to {endpoint} failed: {reason}")]
    Request {
        /// Endpoint path, e.g. `time_status`.
        endpoint: String,
        /// Human-readable cause reported by the HTTP client.
        reason: String,
    },

    /// The backend answered with a status outside the 2xx range.
    #[error("Request to {endpoint} returned HTTP {status}")]
    Status {
        /// Endpoint path, e.g. `quote`.
        endpoint: String,
        /// Numeric HTTP status code.
        status: u16,
    },

    /// A successful response carried a body that is not the expected JSON.
    #[error("Malformed response from {endpoint}: {reason}")]
    Decode {
        /// Endpoint path.
        endpoint: String,
        /// Decoder message.
        reason: String,
    },

    /// Persisted watchlist data could not be parsed.
    #[error("Parse watchlist error: {0}")]
    Parse(String),

    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A line typed by the user is not a known command.
    #[error("Unknown command: {0}")]
    Command(String),

    /// Channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),
}

impl DashboardError {
    /// Returns `true` for failures of a remote call (network or non-2xx status).
    pub fn is_request_error(&self) -> bool {
        matches!(self, DashboardError::Request { .. } | DashboardError::Status { .. })
    }
}
