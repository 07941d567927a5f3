//! Market info and holiday panels.
//!
//! The market panel shows the session status from the last fetch and counts
//! the seconds to the next phase down locally, once per countdown tick. It
//! owns the countdown [`Timer`]: a new status always cancels the running
//! countdown before arming a fresh one, so at most one is live. When the
//! count reaches zero the panel reports [`CountdownTick::Expired`] and the
//! caller fetches a new status.
use std::time::Duration;

use dashboard_common::format::{format_seconds, PLACEHOLDER};
use dashboard_common::model::{HolidayInfo, SessionState, SessionStatus};

use crate::schedule::Timer;
use crate::sequence::Sequencer;

/// Countdown text while a new status is being fetched.
pub const REFRESHING: &str = "Refreshing...";
/// Holiday text when the backend knows of no upcoming holiday.
pub const NO_HOLIDAY: &str = "No holiday info";

/// Outcome of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Still counting.
    Running,
    /// Reached zero; the countdown was stopped.
    Expired,
}

/// Session status panel with its live countdown.
#[derive(Debug)]
pub struct MarketPanel {
    us_time: String,
    china_time: String,
    state_label: String,
    state: SessionState,
    next_state: String,
    countdown_text: String,
    remaining: i64,
    countdown: Timer,
    countdown_period: Duration,
    tokens: Sequencer,
}

impl MarketPanel {
    /// Empty panel whose countdown ticks every `countdown_period`.
    pub fn new(countdown_period: Duration) -> Self {
        MarketPanel {
            us_time: PLACEHOLDER.to_string(),
            china_time: PLACEHOLDER.to_string(),
            state_label: PLACEHOLDER.to_string(),
            state: SessionState::Closed,
            next_state: PLACEHOLDER.to_string(),
            countdown_text: PLACEHOLDER.to_string(),
            remaining: 0,
            countdown: Timer::idle(),
            countdown_period,
            tokens: Sequencer::new(),
        }
    }

    /// Token for a new status request.
    pub fn begin_refresh(&mut self) -> u64 {
        self.tokens.issue()
    }

    /// Shows `status` and restarts the countdown from its remaining seconds.
    /// Returns `false` and changes nothing for a stale response.
    pub fn apply(&mut self, token: u64, status: &SessionStatus) -> bool {
        if !self.tokens.accept(token) {
            return false;
        }
        self.us_time = status.us_time.clone();
        self.china_time = status.china_time.clone();
        self.state_label = status.current_state.clone();
        self.state = status.state();
        self.next_state = status.next_state.clone();

        self.remaining = status.seconds_to_next_state();
        self.countdown.cancel();
        self.countdown = Timer::every(self.countdown_period);
        true
    }

    /// Advances the countdown by one tick.
    pub fn tick(&mut self) -> CountdownTick {
        if self.remaining <= 0 {
            self.countdown.cancel();
            self.countdown_text = REFRESHING.to_string();
            return CountdownTick::Expired;
        }
        self.countdown_text = format_seconds(self.remaining);
        self.remaining -= 1;
        CountdownTick::Running
    }

    /// The countdown timer handle.
    pub fn countdown(&self) -> &Timer {
        &self.countdown
    }

    /// New York time label.
    pub fn us_time(&self) -> &str {
        &self.us_time
    }

    /// Beijing time label.
    pub fn china_time(&self) -> &str {
        &self.china_time
    }

    /// Current phase label as sent by the backend.
    pub fn state_label(&self) -> &str {
        &self.state_label
    }

    /// Current phase used for styling.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Next phase label.
    pub fn next_state(&self) -> &str {
        &self.next_state
    }

    /// Countdown text, `HH:MM:SS` once ticking.
    pub fn countdown_text(&self) -> &str {
        &self.countdown_text
    }

    /// Seconds the next tick will display.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }
}

/// Upcoming holiday panel.
#[derive(Debug)]
pub struct HolidayPanel {
    text: String,
    holiday: Option<HolidayInfo>,
    tokens: Sequencer,
}

impl HolidayPanel {
    /// Panel showing the placeholder.
    pub fn new() -> Self {
        HolidayPanel {
            text: PLACEHOLDER.to_string(),
            holiday: None,
            tokens: Sequencer::new(),
        }
    }

    /// Token for a new holiday request.
    pub fn begin_refresh(&mut self) -> u64 {
        self.tokens.issue()
    }

    /// Shows `holiday`, or [`NO_HOLIDAY`]. Returns `false` for a stale response.
    pub fn apply(&mut self, token: u64, holiday: Option<HolidayInfo>) -> bool {
        if !self.tokens.accept(token) {
            return false;
        }
        self.text = holiday
            .as_ref()
            .map(HolidayInfo::describe)
            .unwrap_or_else(|| NO_HOLIDAY.to_string());
        self.holiday = holiday;
        true
    }

    /// Text on screen.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Last holiday shown.
    pub fn holiday(&self) -> Option<&HolidayInfo> {
        self.holiday.as_ref()
    }
}

impl Default for HolidayPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(state: &str, seconds: f64) -> SessionStatus {
        SessionStatus {
            us_time: "2025-01-06 10:15 Monday".into(),
            china_time: "2025-01-06 23:15 Monday".into(),
            current_state: state.into(),
            next_state: "盘后".into(),
            time_to_next_state_seconds: seconds,
        }
    }

    fn panel() -> MarketPanel {
        MarketPanel::new(Duration::from_secs(1))
    }

    #[test]
    fn apply_fills_fields_and_arms_countdown() {
        let mut panel = panel();
        assert!(!panel.countdown().is_armed());

        let token = panel.begin_refresh();
        assert!(panel.apply(token, &status("盘中", 3725.0)));
        assert_eq!(panel.us_time(), "2025-01-06 10:15 Monday");
        assert_eq!(panel.state(), SessionState::Trading);
        assert_eq!(panel.state().style_class(), "status-trading");
        assert_eq!(panel.next_state(), "盘后");
        assert!(panel.countdown().is_armed());
        assert_eq!(panel.countdown().period(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn countdown_counts_down_then_expires() {
        let mut panel = panel();
        let token = panel.begin_refresh();
        panel.apply(token, &status("盘前", 2.0));

        assert_eq!(panel.tick(), CountdownTick::Running);
        assert_eq!(panel.countdown_text(), "00:00:02");
        assert_eq!(panel.tick(), CountdownTick::Running);
        assert_eq!(panel.countdown_text(), "00:00:01");
        assert_eq!(panel.tick(), CountdownTick::Expired);
        assert_eq!(panel.countdown_text(), REFRESHING);
        assert!(!panel.countdown().is_armed());
    }

    #[test]
    fn zero_or_negative_remaining_expires_on_first_tick() {
        let mut panel = panel();
        let token = panel.begin_refresh();
        panel.apply(token, &status("休市", -5.0));
        assert_eq!(panel.tick(), CountdownTick::Expired);
    }

    #[test]
    fn new_status_restarts_countdown() {
        let mut panel = panel();
        let first = panel.begin_refresh();
        panel.apply(first, &status("盘中", 100.0));
        panel.tick();
        panel.tick();
        assert_eq!(panel.remaining(), 98);

        let second = panel.begin_refresh();
        panel.apply(second, &status("盘中", 50.0));
        assert_eq!(panel.remaining(), 50);
        assert!(panel.countdown().is_armed());
    }

    #[test]
    fn stale_status_is_discarded() {
        let mut panel = panel();
        let old = panel.begin_refresh();
        let new = panel.begin_refresh();
        assert!(panel.apply(new, &status("盘后", 10.0)));
        assert!(!panel.apply(old, &status("盘前", 99.0)));
        assert_eq!(panel.state(), SessionState::PostMarket);
        assert_eq!(panel.remaining(), 10);
    }

    #[test]
    fn unknown_state_uses_closed_style() {
        let mut panel = panel();
        let token = panel.begin_refresh();
        panel.apply(token, &status("Overnight", 10.0));
        assert_eq!(panel.state_label(), "Overnight");
        assert_eq!(panel.state().style_class(), "status-closed");
    }

    #[test]
    fn holiday_panel_shows_event_or_fallback() {
        let mut holidays = HolidayPanel::new();
        assert_eq!(holidays.text(), PLACEHOLDER);

        let token = holidays.begin_refresh();
        let christmas = HolidayInfo {
            event_name: "Christmas".into(),
            at_date: "2025-12-25".into(),
            trading_hour: None,
        };
        assert!(holidays.apply(token, Some(christmas)));
        assert_eq!(holidays.text(), "Christmas (2025-12-25)");

        let token = holidays.begin_refresh();
        assert!(holidays.apply(token, None));
        assert_eq!(holidays.text(), NO_HOLIDAY);
        assert!(holidays.holiday().is_none());
    }
}
