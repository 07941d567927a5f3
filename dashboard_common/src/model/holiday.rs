//! Upcoming market holiday as served by `GET /api/recent_holidays`.
use serde::{Deserialize, Serialize};

/// Response envelope. `upcoming_holiday` is `null` when nothing is scheduled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentHolidays {
    /// Nearest holiday on or after today, if any.
    #[serde(default)]
    pub upcoming_holiday: Option<HolidayInfo>,
}

/// One holiday event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayInfo {
    /// Name of the holiday, e.g. `Christmas`.
    pub event_name: String,
    /// Date as `YYYY-MM-DD`.
    pub at_date: String,
    /// Trading window for a shortened session. Empty or absent means the
    /// market is closed all day.
    #[serde(default)]
    pub trading_hour: Option<String>,
}

impl HolidayInfo {
    /// `true` when no trading happens on that date.
    pub fn is_full_day(&self) -> bool {
        self.trading_hour
            .as_deref()
            .map(|hours| hours.trim().is_empty())
            .unwrap_or(true)
    }

    /// One-line description, e.g. `Christmas (2025-12-25)`.
    pub fn describe(&self) -> String {
        match self.trading_hour.as_deref().map(str::trim) {
            Some(hours) if !hours.is_empty() => {
                format!("{} ({}) early close, trading {}", self.event_name, self.at_date, hours)
            }
            _ => format!("{} ({})", self.event_name, self.at_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_finnhub_event() {
        let body = r#"{"upcoming_holiday": {"eventName": "Christmas", "atDate": "2025-12-25", "tradingHour": ""}}"#;
        let holidays: RecentHolidays = serde_json::from_str(body).unwrap();
        let holiday = holidays.upcoming_holiday.unwrap();
        assert!(holiday.is_full_day());
        assert_eq!(holiday.describe(), "Christmas (2025-12-25)");
    }

    #[test]
    fn null_holiday_is_absent() {
        let holidays: RecentHolidays = serde_json::from_str(r#"{"upcoming_holiday": null}"#).unwrap();
        assert!(holidays.upcoming_holiday.is_none());
    }

    #[test]
    fn shortened_session_mentions_hours() {
        let holiday = HolidayInfo {
            event_name: "Independence Day".into(),
            at_date: "2025-07-03".into(),
            trading_hour: Some("09:30-13:00".into()),
        };
        assert!(!holiday.is_full_day());
        assert_eq!(
            holiday.describe(),
            "Independence Day (2025-07-03) early close, trading 09:30-13:00"
        );
    }
}
