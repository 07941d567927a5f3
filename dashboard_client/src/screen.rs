//! Terminal painter.
//!
//! [`compose`] lays the panels out as one text frame; [`Screen::paint`]
//! writes it to stdout, clearing the terminal first unless told not to.
use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use dashboard_common::command::HELP;
use dashboard_common::format::Tone;
use dashboard_common::model::SessionState;
use dashboard_common::Result;

use crate::market::{HolidayPanel, MarketPanel};
use crate::view::WatchlistView;

const CLEAR: &str = "\x1b[2J\x1b[H";

/// Paints frames to stdout.
#[derive(Debug)]
pub struct Screen {
    clear: bool,
    last_frame: Option<String>,
}

impl Screen {
    /// `clear` wipes the terminal before every frame; otherwise frames are
    /// appended.
    pub fn new(clear: bool) -> Self {
        Screen {
            clear,
            last_frame: None,
        }
    }

    /// Writes `frame` unless it is identical to the previous one.
    pub fn paint(&mut self, frame: String) -> Result<()> {
        if self.last_frame.as_ref() == Some(&frame) {
            return Ok(());
        }
        let mut out = io::stdout().lock();
        if self.clear {
            out.write_all(CLEAR.as_bytes())?;
        }
        write!(out, "{}", frame)?;
        out.flush()?;
        self.last_frame = Some(frame);
        Ok(())
    }
}

/// Builds the full dashboard frame. A pending `prompt` is the last line, left
/// open so typed input follows it.
pub fn compose(
    market: &MarketPanel,
    holidays: &HolidayPanel,
    view: &WatchlistView,
    prompt: Option<&str>,
) -> String {
    let mut lines = Vec::new();

    lines.push("US market".bold().to_string());
    lines.push(format!("  {:<12}{}", "US time", market.us_time()));
    lines.push(format!("  {:<12}{}", "China time", market.china_time()));
    lines.push(format!(
        "  {:<12}{}",
        "State",
        state_badge(market.state(), market.state_label())
    ));
    lines.push(format!(
        "  {:<12}{} in {}",
        "Next",
        market.next_state(),
        market.countdown_text()
    ));

    lines.push(String::new());
    lines.push("Upcoming holiday".bold().to_string());
    lines.push(format!("  {}", holidays.text()));

    lines.push(String::new());
    lines.push(format!("Watchlist ({})", view.cards().len()).bold().to_string());
    if view.cards().is_empty() {
        lines.push("  empty, type `add SYMBOL`".dimmed().to_string());
    }
    for card in view.cards() {
        let updated = card
            .updated_at
            .map(|at| format!("  @ {}", at.format("%H:%M:%S")))
            .unwrap_or_default();
        lines.push(format!(
            "  [{}] {:<8} price {:>10}   change {}{}",
            card.number,
            card.symbol.as_str(),
            card.display.price,
            tone(card.display.tone, &card.display.change),
            updated.dimmed()
        ));
    }

    lines.push(String::new());
    lines.push(HELP.dimmed().to_string());
    match prompt {
        Some(prompt) => {
            lines.push(prompt.bold().to_string());
            lines.join("\n")
        }
        None => lines.join("\n") + "\n",
    }
}

fn state_badge(state: SessionState, label: &str) -> ColoredString {
    match state {
        SessionState::PreMarket => label.yellow(),
        SessionState::Trading => label.green().bold(),
        SessionState::PostMarket => label.cyan(),
        SessionState::Closed => label.red(),
    }
}

fn tone(tone: Tone, text: &str) -> ColoredString {
    match tone {
        Tone::Positive => text.green(),
        Tone::Negative => text.red(),
        Tone::Neutral => text.normal(),
    }
}
