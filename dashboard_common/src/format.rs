//! Display formatting for the countdown and quote cards.
use crate::model::Quote;

/// Neutral marker shown while a value is unknown.
pub const PLACEHOLDER: &str = "--";

/// Formats a countdown as zero-padded `HH:MM:SS`. Negative input yields `0s`.
///
/// Hours are not wrapped, so values of 100 hours or more print three digits.
pub fn format_seconds(seconds: i64) -> String {
    if seconds < 0 {
        return "0s".to_string();
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Color cue for a change figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Non-negative change.
    Positive,
    /// Negative change.
    Negative,
    /// No data.
    Neutral,
}

/// Text shown on a watchlist card for one quote.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteDisplay {
    /// Price rounded to 2 decimals, or the placeholder.
    pub price: String,
    /// `+1.5 (+0.8%)` style change, or the placeholder.
    pub change: String,
    /// Color cue for `change`.
    pub tone: Tone,
}

impl QuoteDisplay {
    /// Placeholder display used before the first quote and for missing data.
    pub fn placeholder() -> Self {
        QuoteDisplay {
            price: PLACEHOLDER.to_string(),
            change: PLACEHOLDER.to_string(),
            tone: Tone::Neutral,
        }
    }

    /// Builds the display for `quote`. Both prices must be present, otherwise
    /// the placeholder is returned.
    pub fn from_quote(quote: &Quote) -> Self {
        let (Some((current, _)), Some((change, percent))) = (quote.prices(), quote.change_figures())
        else {
            return Self::placeholder();
        };
        // -0.0 would print as "-0"
        let change = if change == 0.0 { 0.0 } else { change };
        let percent = if percent == 0.0 { 0.0 } else { percent };
        let non_negative = change >= 0.0;
        let sign = if non_negative { "+" } else { "" };
        QuoteDisplay {
            price: format!("{:.2}", current),
            change: format!("{sign}{change} ({sign}{percent}%)"),
            tone: if non_negative { Tone::Positive } else { Tone::Negative },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(current: Option<f64>, previous: Option<f64>, change: f64, percent: f64) -> Quote {
        Quote {
            current_price: current,
            previous_close: previous,
            change: Some(change),
            percent_change: Some(percent),
            ..Quote::default()
        }
    }

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(format_seconds(0), "00:00:00");
        assert_eq!(format_seconds(59), "00:00:59");
        assert_eq!(format_seconds(3661), "01:01:01");
        assert_eq!(format_seconds(20699), "05:44:59");
    }

    #[test]
    fn formatted_fields_recompose_the_input() {
        for s in [0_i64, 1, 61, 3599, 3600, 86_399, 200_000] {
            let text = format_seconds(s);
            let parts: Vec<i64> = text.split(':').map(|p| p.parse().unwrap()).collect();
            assert_eq!(parts.len(), 3);
            assert!(text.split(':').skip(1).all(|p| p.len() == 2));
            assert_eq!(3600 * parts[0] + 60 * parts[1] + parts[2], s);
        }
    }

    #[test]
    fn negative_seconds_print_zero_marker() {
        assert_eq!(format_seconds(-1), "0s");
        assert_eq!(format_seconds(i64::MIN), "0s");
    }

    #[test]
    fn positive_change_gets_plus_sign() {
        let display = QuoteDisplay::from_quote(&quote(Some(190.4567), Some(188.0), 2.46, 1.31));
        assert_eq!(display.price, "190.46");
        assert_eq!(display.change, "+2.46 (+1.31%)");
        assert_eq!(display.tone, Tone::Positive);
    }

    #[test]
    fn negative_change_keeps_its_own_sign() {
        let display = QuoteDisplay::from_quote(&quote(Some(97.0), Some(100.0), -3.0, -3.0));
        assert_eq!(display.price, "97.00");
        assert_eq!(display.change, "-3 (-3%)");
        assert_eq!(display.tone, Tone::Negative);
    }

    #[test]
    fn flat_change_is_positive() {
        let display = QuoteDisplay::from_quote(&quote(Some(10.0), Some(10.0), -0.0, 0.0));
        assert_eq!(display.change, "+0 (+0%)");
        assert_eq!(display.tone, Tone::Positive);
    }

    #[test]
    fn missing_price_shows_placeholders() {
        let display = QuoteDisplay::from_quote(&quote(None, Some(100.0), 1.0, 1.0));
        assert_eq!(display, QuoteDisplay::placeholder());
        assert_eq!(display.price, "--");
        assert_eq!(display.change, "--");

        let display = QuoteDisplay::from_quote(&quote(Some(100.0), None, 1.0, 1.0));
        assert_eq!(display.tone, Tone::Neutral);
    }
}
