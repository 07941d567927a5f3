//! Market session status as served by `GET /api/time_status`.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Session status snapshot. Only authoritative at fetch time: the remaining
/// seconds are counted down locally afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    /// New York local time, e.g. `2025-01-06 10:15 Monday`.
    pub us_time: String,
    /// Beijing local time.
    pub china_time: String,
    /// Label of the current phase, e.g. `盘中`.
    pub current_state: String,
    /// Label of the phase that follows.
    pub next_state: String,
    /// Seconds until `next_state` begins. The backend sends a float.
    pub time_to_next_state_seconds: f64,
}

impl SessionStatus {
    /// Typed phase for styling. Unknown labels map to [`SessionState::Closed`].
    pub fn state(&self) -> SessionState {
        SessionState::from_label(&self.current_state)
    }

    /// Whole seconds until the next phase, floored.
    pub fn seconds_to_next_state(&self) -> i64 {
        self.time_to_next_state_seconds.floor() as i64
    }
}

/// Trading phase of the US market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SessionState {
    /// 04:00 - 09:30 New York time.
    #[strum(to_string = "盘前", serialize = "pre", serialize = "pre-market")]
    PreMarket,
    /// Regular session.
    #[strum(to_string = "盘中", serialize = "trading", serialize = "open")]
    Trading,
    /// 16:00 - 20:00 New York time.
    #[strum(to_string = "盘后", serialize = "post", serialize = "after-hours")]
    PostMarket,
    /// Everything else, including weekends, holidays and the overnight window.
    #[strum(to_string = "休市", serialize = "closed")]
    Closed,
}

impl SessionState {
    /// Parses a backend label, falling back to `Closed` for anything unknown
    /// (the backend also reports `Overnight`).
    pub fn from_label(label: &str) -> Self {
        label.trim().parse().unwrap_or(SessionState::Closed)
    }

    /// Style class of the status badge.
    pub fn style_class(&self) -> &'static str {
        match self {
            SessionState::PreMarket => "status-pre",
            SessionState::Trading => "status-trading",
            SessionState::PostMarket => "status-post",
            SessionState::Closed => "status-closed",
        }
    }
}
