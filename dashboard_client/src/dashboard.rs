//! Refresh orchestrator.
//!
//! [`Dashboard`] owns every panel, the watchlist store and all timers, and
//! runs the single event loop that ties them together:
//!
//! - on start it refreshes the market panel, the holiday panel, renders the
//!   watchlist and refreshes its quotes, once each;
//! - it then arms three repeating intervals (market status, holidays,
//!   quotes) that live as long as the loop;
//! - background fetch results, user commands, interval ticks and countdown
//!   ticks are multiplexed with `crossbeam_channel::select!` and handled one
//!   at a time, so no state is ever shared between threads.
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{select, unbounded, Receiver, RecvTimeoutError, Sender};
use dashboard_common::command::HELP;
use dashboard_common::{Result, UserCommand};
use log::{debug, error, info, warn};

use crate::api::MarketApi;
use crate::event::Event;
use crate::fetch::Fetcher;
use crate::input::SYMBOL_PROMPT;
use crate::market::{CountdownTick, HolidayPanel, MarketPanel};
use crate::refresher::QuoteRefresher;
use crate::schedule::Timer;
use crate::screen::{compose, Screen};
use crate::store::{KeyValueStore, WatchlistStore};
use crate::view::WatchlistView;

/// Polling periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshConfig {
    /// Session status refresh period.
    pub market_every: Duration,
    /// Holiday refresh period.
    pub holidays_every: Duration,
    /// Watchlist quotes refresh period.
    pub quotes_every: Duration,
    /// Countdown resolution.
    pub countdown_tick: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        RefreshConfig {
            market_every: Duration::from_secs(60),
            holidays_every: Duration::from_secs(300),
            quotes_every: Duration::from_secs(60),
            countdown_tick: Duration::from_secs(1),
        }
    }
}

/// Whether the loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the loop.
    Quit,
}

/// The three repeating refresh triggers.
#[derive(Debug)]
pub struct Intervals {
    /// Session status.
    pub market: Timer,
    /// Holidays.
    pub holidays: Timer,
    /// Watchlist quotes.
    pub quotes: Timer,
}

impl Intervals {
    fn arm(config: &RefreshConfig) -> Self {
        Intervals {
            market: Timer::every(config.market_every),
            holidays: Timer::every(config.holidays_every),
            quotes: Timer::every(config.quotes_every),
        }
    }
}

/// Dashboard state and event loop.
pub struct Dashboard<S> {
    store: WatchlistStore<S>,
    view: WatchlistView,
    market: MarketPanel,
    holidays: HolidayPanel,
    refresher: QuoteRefresher,
    fetcher: Fetcher,
    events_tx: Sender<Event>,
    events: Receiver<Event>,
    intervals: Option<Intervals>,
    config: RefreshConfig,
    screen: Option<Screen>,
    awaiting_symbol: bool,
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Creates an idle dashboard. Nothing is fetched until [`Dashboard::start`]
    /// or [`Dashboard::run`].
    pub fn new(api: Arc<dyn MarketApi>, store: WatchlistStore<S>, config: RefreshConfig) -> Self {
        let (events_tx, events) = unbounded();
        Dashboard {
            store,
            view: WatchlistView::new(),
            market: MarketPanel::new(config.countdown_tick),
            holidays: HolidayPanel::new(),
            refresher: QuoteRefresher::new(),
            fetcher: Fetcher::new(api, events_tx.clone()),
            events_tx,
            events,
            intervals: None,
            config,
            screen: None,
            awaiting_symbol: false,
        }
    }

    /// Paints every state change to `screen`.
    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = Some(screen);
        self
    }

    /// Sender for posting events (user input) into the loop.
    pub fn events_sender(&self) -> Sender<Event> {
        self.events_tx.clone()
    }

    /// Triggers every refresh once and arms the repeating intervals.
    pub fn start(&mut self) {
        self.refresh_market();
        self.refresh_holidays();
        self.render_watchlist();
        self.refresh_quotes();
        self.intervals = Some(Intervals::arm(&self.config));
        info!(
            "Dashboard started: market every {:?}, holidays every {:?}, quotes every {:?}",
            self.config.market_every, self.config.holidays_every, self.config.quotes_every
        );
    }

    /// Runs the event loop until `quit` or a message on `shutdown`.
    pub fn run(&mut self, shutdown: Receiver<()>) -> Result<()> {
        if self.intervals.is_none() {
            self.start();
        }
        self.repaint();

        loop {
            let events = self.events.clone();
            let (market_tick, holidays_tick, quotes_tick) = match &self.intervals {
                Some(intervals) => (
                    intervals.market.receiver(),
                    intervals.holidays.receiver(),
                    intervals.quotes.receiver(),
                ),
                None => (Timer::idle().receiver(), Timer::idle().receiver(), Timer::idle().receiver()),
            };
            let countdown = self.market.countdown().receiver();

            let flow = select! {
                recv(events) -> msg => match msg {
                    Ok(event) => self.handle_event(event),
                    Err(_) => Flow::Quit,
                },
                recv(market_tick) -> _ => {
                    self.refresh_market();
                    Flow::Continue
                },
                recv(holidays_tick) -> _ => {
                    self.refresh_holidays();
                    Flow::Continue
                },
                recv(quotes_tick) -> _ => {
                    self.refresh_quotes();
                    Flow::Continue
                },
                recv(countdown) -> _ => {
                    self.tick_countdown();
                    Flow::Continue
                },
                recv(shutdown) -> _ => Flow::Quit,
            };

            if flow == Flow::Quit {
                info!("Dashboard stopping...");
                break;
            }
            self.repaint();
        }
        Ok(())
    }

    /// Waits up to `timeout` for one event and handles it. Returns `None` if
    /// nothing arrived.
    pub fn process_next(&mut self, timeout: Duration) -> Option<Flow> {
        match self.events.recv_timeout(timeout) {
            Ok(event) => Some(self.handle_event(event)),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Applies one event.
    pub fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Session { token, result } => match result {
                Ok(status) => {
                    if !self.market.apply(token, &status) {
                        debug!("Discarding stale session status (token {})", token);
                    }
                }
                Err(e) => error!("Market status refresh failed: {}", e),
            },
            Event::Holidays { token, result } => match result {
                Ok(holiday) => {
                    if !self.holidays.apply(token, holiday) {
                        debug!("Discarding stale holiday info (token {})", token);
                    }
                }
                Err(e) => error!("Holiday refresh failed: {}", e),
            },
            Event::Quote {
                symbol,
                token,
                result,
            } => {
                self.refresher.apply(&symbol, token, result, &mut self.view);
            }
            Event::AwaitingSymbol => self.awaiting_symbol = true,
            Event::Input(command) => {
                self.awaiting_symbol = false;
                return self.handle_command(command);
            }
            Event::InputClosed => {
                self.awaiting_symbol = false;
                info!("Input closed; the dashboard keeps refreshing until Ctrl+C");
            }
        }
        Flow::Continue
    }

    /// Advances the countdown, re-fetching the session status when it expires.
    pub fn tick_countdown(&mut self) -> CountdownTick {
        let tick = self.market.tick();
        if tick == CountdownTick::Expired {
            debug!("Countdown expired, refreshing market status");
            self.refresh_market();
        }
        tick
    }

    /// Adds a symbol; on change re-renders and re-fetches all quotes.
    pub fn add_symbol(&mut self, raw: &str) {
        match self.store.add(raw) {
            Ok(true) => {
                info!("Added {} to watchlist", raw.trim().to_uppercase());
                self.render_watchlist();
                self.refresh_quotes();
            }
            Ok(false) => debug!("Nothing to add for {:?}", raw),
            Err(e) => error!("Failed to save watchlist: {}", e),
        }
    }

    /// Removes a symbol given by name or card number; on change re-renders
    /// and re-fetches all quotes.
    pub fn remove_symbol(&mut self, target: &str) {
        let Some(symbol) = self.view.resolve(target) else {
            warn!("Nothing to remove for {:?}", target);
            return;
        };
        match self.store.remove(symbol.as_str()) {
            Ok(true) => {
                info!("Removed {} from watchlist", symbol);
                self.render_watchlist();
                self.refresh_quotes();
            }
            Ok(false) => warn!("{} is not in the watchlist", symbol),
            Err(e) => error!("Failed to save watchlist: {}", e),
        }
    }

    /// Market panel.
    pub fn market(&self) -> &MarketPanel {
        &self.market
    }

    /// Holiday panel.
    pub fn holidays(&self) -> &HolidayPanel {
        &self.holidays
    }

    /// Watchlist cards.
    pub fn view(&self) -> &WatchlistView {
        &self.view
    }

    /// Watchlist store.
    pub fn store(&self) -> &WatchlistStore<S> {
        &self.store
    }

    /// Prompt the user is currently answering, if any.
    pub fn pending_prompt(&self) -> Option<&'static str> {
        self.awaiting_symbol.then_some(SYMBOL_PROMPT)
    }

    /// Repeating triggers, armed by [`Dashboard::start`].
    pub fn intervals(&self) -> Option<&Intervals> {
        self.intervals.as_ref()
    }

    fn handle_command(&mut self, command: UserCommand) -> Flow {
        match command {
            UserCommand::Add(raw) => self.add_symbol(&raw),
            UserCommand::Remove(target) => self.remove_symbol(&target),
            UserCommand::Refresh => {
                self.refresh_market();
                self.refresh_holidays();
                self.refresh_quotes();
            }
            UserCommand::Help => info!("{}", HELP),
            UserCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn refresh_market(&mut self) {
        let token = self.market.begin_refresh();
        self.fetcher.session_status(token);
    }

    fn refresh_holidays(&mut self) {
        let token = self.holidays.begin_refresh();
        self.fetcher.recent_holidays(token);
    }

    fn render_watchlist(&mut self) {
        let symbols = self.store.load();
        self.view.render(&symbols);
    }

    fn refresh_quotes(&mut self) {
        let symbols = self.store.load();
        let started = self.refresher.refresh_all(&symbols, &self.fetcher);
        debug!("Requested {} quotes", started);
    }

    fn repaint(&mut self) {
        let prompt = self.pending_prompt();
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        let frame = compose(&self.market, &self.holidays, &self.view, prompt);
        if let Err(e) = screen.paint(frame) {
            error!("Failed to paint dashboard: {}", e);
        }
    }
}
