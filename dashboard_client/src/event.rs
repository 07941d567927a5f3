//! Messages delivered to the dashboard event loop.
use dashboard_common::model::{HolidayInfo, Quote, SessionStatus};
use dashboard_common::{Result, Symbol, UserCommand};

/// Completed background work or user input.
#[derive(Debug)]
pub enum Event {
    /// Result of `GET /time_status`.
    Session {
        /// Request token.
        token: u64,
        /// Fetched status or the failure.
        result: Result<SessionStatus>,
    },
    /// Result of `GET /recent_holidays`.
    Holidays {
        /// Request token.
        token: u64,
        /// Nearest holiday, if any, or the failure.
        result: Result<Option<HolidayInfo>>,
    },
    /// Result of `GET /quote` for one symbol.
    Quote {
        /// Symbol the quote was requested for.
        symbol: Symbol,
        /// Request token.
        token: u64,
        /// Fetched quote or the failure.
        result: Result<Quote>,
    },
    /// A bare `add` was typed; the next input line is the symbol.
    AwaitingSymbol,
    /// A command typed by the user.
    Input(UserCommand),
    /// Standard input reached end of file.
    InputClosed,
}
