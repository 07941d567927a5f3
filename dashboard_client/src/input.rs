//! Standard input reader.
//!
//! Parses one command per line and forwards it to the event loop. A bare
//! `add` asks the loop to show [`SYMBOL_PROMPT`] and takes the symbol from
//! the next line.
use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use dashboard_common::command::HELP;
use dashboard_common::{DashboardError, Result, UserCommand};
use log::{error, info, warn};

use crate::event::Event;

/// Prompt shown for a bare `add`.
pub const SYMBOL_PROMPT: &str = "Enter stock symbol (e.g. AAPL): ";

/// Reads commands from `reader` until end of input or `quit`.
pub fn read_commands<R: BufRead>(reader: R, tx: &Sender<Event>) -> Result<()> {
    let mut lines = reader.lines();
    while let Some(line) = lines.next() {
        let line = line?;
        let command = match UserCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("{}. {}", e, HELP);
                continue;
            }
        };

        let command = if command.needs_symbol() {
            send(tx, Event::AwaitingSymbol)?;
            match lines.next() {
                Some(symbol) => UserCommand::Add(symbol?),
                None => return send(tx, Event::InputClosed),
            }
        } else {
            command
        };

        let quit = command == UserCommand::Quit;
        send(tx, Event::Input(command))?;
        if quit {
            return Ok(());
        }
    }
    send(tx, Event::InputClosed)
}

/// Runs [`read_commands`] over the process's stdin on a background thread.
pub fn spawn_stdin_reader(tx: Sender<Event>) -> Result<JoinHandle<()>> {
    let handle = thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            match read_commands(stdin.lock(), &tx) {
                Ok(()) => info!("Input reader stopped"),
                Err(e) => error!("Input reader failed: {}", e),
            }
        })?;
    Ok(handle)
}

fn send(tx: &Sender<Event>, event: Event) -> Result<()> {
    tx.send(event)
        .map_err(|e| DashboardError::ChannelSend(format!("{:?}", e.into_inner())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::io::Cursor;

    fn run(input: &str) -> Vec<Event> {
        let (tx, rx) = unbounded();
        read_commands(Cursor::new(input.to_string()), &tx).unwrap();
        drop(tx);
        rx.iter().collect()
    }

    #[test]
    fn forwards_commands_and_reports_eof() {
        let events = run("add aapl\n\nrm 1\n");
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], Event::Input(UserCommand::Add(s)) if s == "aapl"));
        assert!(matches!(&events[1], Event::Input(UserCommand::Remove(s)) if s == "1"));
        assert!(matches!(events[2], Event::InputClosed));
    }

    #[test]
    fn bare_add_prompts_for_symbol() {
        let events = run("add\n tsla \n");
        assert!(matches!(events[0], Event::AwaitingSymbol));
        assert!(matches!(&events[1], Event::Input(UserCommand::Add(s)) if s == " tsla "));
    }

    #[test]
    fn bare_add_at_end_of_input_closes() {
        let events = run("add\n");
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Event::AwaitingSymbol));
        assert!(matches!(events[1], Event::InputClosed));
    }

    #[test]
    fn bad_lines_are_skipped() {
        let events = run("sell everything\nrefresh\n");
        assert!(matches!(events[0], Event::Input(UserCommand::Refresh)));
        assert!(matches!(events[1], Event::InputClosed));
    }

    #[test]
    fn quit_stops_reading() {
        let events = run("quit\nadd aapl\n");
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], Event::Input(UserCommand::Quit)));
    }
}
