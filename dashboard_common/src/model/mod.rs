//! JSON payloads returned by the market backend.
//!
//! - `session` — market session status and the typed trading phase.
//! - `holiday` — the nearest upcoming market holiday.
//! - `quote` — latest price and day-over-day change for one symbol.
pub mod holiday;
pub mod quote;
pub mod session;

pub use holiday::{HolidayInfo, RecentHolidays};
pub use quote::Quote;
pub use session::{SessionState, SessionStatus};
