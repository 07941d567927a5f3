//! Watchlist cards.
//!
//! [`WatchlistView::render`] always throws every card away and rebuilds the
//! list from the symbols it is given, so card order is the store's order and
//! new cards start with placeholders until their quote arrives.
use chrono::{DateTime, Local};
use dashboard_common::format::QuoteDisplay;
use dashboard_common::model::Quote;
use dashboard_common::Symbol;

/// One watchlist entry on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// 1-based position; doubles as the card's removal handle (`rm <n>`).
    pub number: usize,
    /// Symbol label.
    pub symbol: Symbol,
    /// Price and change text.
    pub display: QuoteDisplay,
    /// Local time the last quote was applied.
    pub updated_at: Option<DateTime<Local>>,
}

impl Card {
    fn new(number: usize, symbol: Symbol) -> Self {
        Card {
            number,
            symbol,
            display: QuoteDisplay::placeholder(),
            updated_at: None,
        }
    }
}

/// Cards for the current watchlist.
#[derive(Debug, Default)]
pub struct WatchlistView {
    cards: Vec<Card>,
}

impl WatchlistView {
    /// View with no cards.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all cards with fresh ones for `symbols`.
    pub fn render(&mut self, symbols: &[Symbol]) {
        self.cards = symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(i + 1, symbol.clone()))
            .collect();
    }

    /// Cards in display order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card for `symbol`, if shown.
    pub fn card(&self, symbol: &Symbol) -> Option<&Card> {
        self.cards.iter().find(|card| &card.symbol == symbol)
    }

    /// Updates the card for `symbol`. Returns `false` when no such card exists
    /// anymore (the symbol was removed while its quote was in flight).
    pub fn apply_quote(&mut self, symbol: &Symbol, quote: &Quote) -> bool {
        match self.cards.iter_mut().find(|card| &card.symbol == symbol) {
            Some(card) => {
                card.display = QuoteDisplay::from_quote(quote);
                card.updated_at = Some(Local::now());
                true
            }
            None => false,
        }
    }

    /// Resolves a removal target. A shown symbol matches first, then a card
    /// number, then the text is taken as a symbol.
    pub fn resolve(&self, target: &str) -> Option<Symbol> {
        let symbol = Symbol::normalize(target)?;
        if self.card(&symbol).is_some() {
            return Some(symbol);
        }
        if let Ok(number) = symbol.as_str().parse::<usize>() {
            if let Some(card) = self.cards.iter().find(|card| card.number == number) {
                return Some(card.symbol.clone());
            }
        }
        Some(symbol)
    }
}
