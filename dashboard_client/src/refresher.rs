//! Quote refresher.
//!
//! Issues one independent quote request per watchlist symbol and applies the
//! results to the matching cards as they arrive. A failed symbol is logged
//! and left as it was; the next cycle retries it.
use dashboard_common::model::Quote;
use dashboard_common::{Result, Symbol};
use log::{debug, error, warn};

use crate::fetch::Fetcher;
use crate::sequence::KeyedSequencer;
use crate::view::WatchlistView;

/// Per-symbol quote polling.
#[derive(Debug, Default)]
pub struct QuoteRefresher {
    tokens: KeyedSequencer<Symbol>,
}

impl QuoteRefresher {
    /// Refresher with no requests issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a quote for every symbol in `symbols`. Returns the number of
    /// requests started.
    pub fn refresh_all(&mut self, symbols: &[Symbol], fetcher: &Fetcher) -> usize {
        self.tokens.retain(symbols);
        for symbol in symbols {
            let token = self.tokens.issue();
            debug!("Requesting quote for {} (token {})", symbol, token);
            fetcher.quote(symbol.clone(), token);
        }
        symbols.len()
    }

    /// Applies one completed request to `view`. Returns `true` when a card was
    /// updated.
    pub fn apply(
        &mut self,
        symbol: &Symbol,
        token: u64,
        result: Result<Quote>,
        view: &mut WatchlistView,
    ) -> bool {
        let quote = match result {
            Ok(quote) => quote,
            Err(e) => {
                error!("Error updating watchlist data for {}: {}", symbol, e);
                return false;
            }
        };
        if !self.tokens.accept(symbol, token) {
            debug!("Discarding stale quote for {} (token {})", symbol, token);
            return false;
        }
        if let Some(reason) = &quote.error {
            warn!("Backend has no quote for {}: {}", symbol, reason);
        }
        view.apply_quote(symbol, &quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_common::DashboardError;

    fn sym(name: &str) -> Symbol {
        Symbol::normalize(name).unwrap()
    }

    fn priced(current: f64, previous: f64) -> Quote {
        Quote {
            current_price: Some(current),
            previous_close: Some(previous),
            change: Some(current - previous),
            percent_change: Some(0.0),
            ..Quote::default()
        }
    }

    fn view_with(names: &[&str]) -> WatchlistView {
        let mut view = WatchlistView::new();
        view.render(&names.iter().map(|n| sym(n)).collect::<Vec<_>>());
        view
    }

    #[test]
    fn failure_leaves_other_cards_untouched() {
        let mut view = view_with(&["AAPL", "TSLA"]);
        let mut refresher = QuoteRefresher::new();

        let failed = Err(DashboardError::Status {
            endpoint: "quote".into(),
            status: 502,
        });
        assert!(!refresher.apply(&sym("AAPL"), 1, failed, &mut view));
        assert!(refresher.apply(&sym("TSLA"), 2, Ok(priced(250.0, 240.0)), &mut view));

        assert_eq!(view.card(&sym("AAPL")).unwrap().display.price, "--");
        assert_eq!(view.card(&sym("TSLA")).unwrap().display.price, "250.00");
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut view = view_with(&["AAPL"]);
        let mut refresher = QuoteRefresher::new();

        assert!(refresher.apply(&sym("AAPL"), 7, Ok(priced(101.0, 100.0)), &mut view));
        assert!(!refresher.apply(&sym("AAPL"), 3, Ok(priced(99.0, 100.0)), &mut view));
        assert_eq!(view.card(&sym("AAPL")).unwrap().display.price, "101.00");
    }

    #[test]
    fn error_body_shows_placeholders() {
        let mut view = view_with(&["ZZZZ"]);
        let mut refresher = QuoteRefresher::new();
        let quote = Quote {
            error: Some("Failed to fetch quote".into()),
            ..Quote::default()
        };
        assert!(refresher.apply(&sym("ZZZZ"), 1, Ok(quote), &mut view));
        let card = view.card(&sym("ZZZZ")).unwrap();
        assert_eq!(card.display.price, "--");
        assert_eq!(card.display.change, "--");
    }
}
