//! Watchlist symbols.
//!
//! Symbols are free text typed by the user. The only normalization applied is
//! trimming surrounding whitespace and uppercasing; there is no check against
//! a list of known tickers.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// A trimmed, uppercased, non-empty stock symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Normalizes `raw` into a symbol. Returns `None` when nothing is left
    /// after trimming.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Symbol(trimmed.to_uppercase()))
    }

    /// The symbol text, e.g. `AAPL`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::normalize(s).ok_or_else(|| DashboardError::Command("empty symbol".to_string()))
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
