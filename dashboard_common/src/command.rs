//! Interactive commands typed on the dashboard's standard input.
//!
//! A line is a verb followed by an optional argument, e.g. `add aapl` or
//! `rm 2`. Verbs are matched case-insensitively.
use std::str::FromStr;

use strum_macros::{Display, EnumString};

use crate::error::DashboardError;
use crate::result::Result;

/// Short usage text printed by `help`.
pub const HELP: &str = "commands: add [SYMBOL] | remove <SYMBOL|#> | refresh | help | quit";

/// Command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Verb {
    /// Add a symbol to the watchlist.
    #[strum(to_string = "add", serialize = "a")]
    Add,
    /// Remove a symbol, by name or by card number.
    #[strum(to_string = "remove", serialize = "rm", serialize = "del")]
    Remove,
    /// Refresh every panel now.
    #[strum(to_string = "refresh", serialize = "r")]
    Refresh,
    /// Print usage.
    #[strum(to_string = "help", serialize = "?")]
    Help,
    /// Leave the dashboard.
    #[strum(to_string = "quit", serialize = "exit", serialize = "q")]
    Quit,
}

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Raw symbol text; empty when the user still has to be prompted for it.
    Add(String),
    /// Symbol text or 1-based card number.
    Remove(String),
    /// Refresh every panel now.
    Refresh,
    /// Print usage.
    Help,
    /// Leave the dashboard.
    Quit,
}

impl UserCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(None);
        };
        let verb = Verb::from_str(word).map_err(|_| DashboardError::Command(word.to_string()))?;
        let argument = parts.collect::<Vec<_>>().join(" ");

        let command = match verb {
            Verb::Add => UserCommand::Add(argument),
            Verb::Remove if argument.is_empty() => {
                return Err(DashboardError::Command(format!("{verb} needs a symbol or card number")));
            }
            Verb::Remove => UserCommand::Remove(argument),
            Verb::Refresh => UserCommand::Refresh,
            Verb::Help => UserCommand::Help,
            Verb::Quit => UserCommand::Quit,
        };
        Ok(Some(command))
    }

    /// `true` for an `add` that still lacks its symbol.
    pub fn needs_symbol(&self) -> bool {
        matches!(self, UserCommand::Add(raw) if raw.trim().is_empty())
    }
}
