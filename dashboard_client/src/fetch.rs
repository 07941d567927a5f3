//! Background fetch workers.
//!
//! Each request runs on its own short-lived thread and posts exactly one
//! [`Event`] back to the event loop. Requests are independent: nothing orders
//! the completions, and nothing cancels a request once started.
use std::sync::Arc;
use std::thread;

use crossbeam_channel::Sender;
use dashboard_common::Symbol;
use log::{debug, error};

use crate::api::MarketApi;
use crate::event::Event;

/// Spawns API calls and routes their results to the event loop.
#[derive(Clone)]
pub struct Fetcher {
    api: Arc<dyn MarketApi>,
    tx: Sender<Event>,
}

impl Fetcher {
    /// Creates a fetcher posting results on `tx`.
    pub fn new(api: Arc<dyn MarketApi>, tx: Sender<Event>) -> Self {
        Fetcher { api, tx }
    }

    /// Fetches the session status in the background.
    pub fn session_status(&self, token: u64) {
        self.spawn("time_status", move |api| Event::Session {
            token,
            result: api.session_status(),
        });
    }

    /// Fetches the nearest holiday in the background.
    pub fn recent_holidays(&self, token: u64) {
        self.spawn("recent_holidays", move |api| Event::Holidays {
            token,
            result: api.recent_holidays(),
        });
    }

    /// Fetches the quote for `symbol` in the background.
    pub fn quote(&self, symbol: Symbol, token: u64) {
        self.spawn("quote", move |api| {
            let result = api.quote(&symbol);
            Event::Quote {
                symbol,
                token,
                result,
            }
        });
    }

    fn spawn<F>(&self, endpoint: &'static str, job: F)
    where
        F: FnOnce(&dyn MarketApi) -> Event + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("fetch-{}", endpoint))
            .spawn(move || {
                let event = job(api.as_ref());
                if tx.send(event).is_err() {
                    debug!("Event loop is gone, dropping {} result", endpoint);
                }
            });
        if let Err(e) = spawned {
            error!("Failed to start {} request: {}", endpoint, e);
        }
    }
}
