//! Quote payload as served by `GET /api/quote?symbol=...`.
//!
//! Every field is optional. The backend answers upstream failures with a 2xx
//! status and a body of the form `{"error": "..."}`, which decodes to a quote
//! with no prices: the "no data" state.
use serde::{Deserialize, Serialize};

/// Latest price and day-over-day change for a single symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol echoed back by the backend.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Last traded price.
    #[serde(default)]
    pub current_price: Option<f64>,
    /// Previous session close.
    #[serde(default)]
    pub previous_close: Option<f64>,
    /// `current_price - previous_close`, rounded to 2 decimals.
    #[serde(default)]
    pub change: Option<f64>,
    /// Change relative to the previous close in percent, rounded to 2 decimals.
    #[serde(default)]
    pub percent_change: Option<f64>,
    /// Where the backend got the data from (`REST`).
    #[serde(default)]
    pub source: Option<String>,
    /// Upstream failure reported by the backend.
    #[serde(default)]
    pub error: Option<String>,
}

impl Quote {
    /// Price pair when both sides are known.
    pub fn prices(&self) -> Option<(f64, f64)> {
        match (self.current_price, self.previous_close) {
            (Some(current), Some(previous)) => Some((current, previous)),
            _ => None,
        }
    }

    /// `(change, percent_change)` when both prices are known. Missing figures
    /// are derived from the prices the same way the backend computes them.
    pub fn change_figures(&self) -> Option<(f64, f64)> {
        let (current, previous) = self.prices()?;
        let change = self.change.unwrap_or_else(|| round2(current - previous));
        let percent = self.percent_change.unwrap_or_else(|| {
            if previous == 0.0 {
                0.0
            } else {
                round2((current - previous) / previous * 100.0)
            }
        });
        Some((change, percent))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_quote() {
        let body = r#"{"symbol":"AAPL","current_price":190.5,"previous_close":188.0,
                       "change":2.5,"percent_change":1.33,"source":"REST"}"#;
        let quote: Quote = serde_json::from_str(body).unwrap();
        assert_eq!(quote.prices(), Some((190.5, 188.0)));
        assert_eq!(quote.change_figures(), Some((2.5, 1.33)));
    }

    #[test]
    fn error_body_decodes_to_empty_quote() {
        let quote: Quote = serde_json::from_str(r#"{"error":"Failed to fetch quote"}"#).unwrap();
        assert_eq!(quote.error.as_deref(), Some("Failed to fetch quote"));
        assert!(quote.prices().is_none());
        assert!(quote.change_figures().is_none());
    }

    #[test]
    fn missing_change_is_derived() {
        let quote = Quote {
            current_price: Some(97.0),
            previous_close: Some(100.0),
            ..Quote::default()
        };
        assert_eq!(quote.change_figures(), Some((-3.0, -3.0)));
    }

    #[test]
    fn zero_previous_close_gives_zero_percent() {
        let quote = Quote {
            current_price: Some(1.0),
            previous_close: Some(0.0),
            ..Quote::default()
        };
        assert_eq!(quote.change_figures(), Some((1.0, 0.0)));
    }
}
