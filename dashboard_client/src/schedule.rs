//! Owned timer handles.
//!
//! A [`Timer`] wraps a `crossbeam_channel::tick` receiver. The event loop
//! selects on [`Timer::receiver`]; cancelling swaps the receiver for one that
//! never fires, and dropping the handle stops the timer.
use std::time::{Duration, Instant};

use crossbeam_channel::{never, tick, Receiver};

/// Repeating timer, or an idle one that never fires.
#[derive(Debug)]
pub struct Timer {
    rx: Receiver<Instant>,
    period: Option<Duration>,
}

impl Timer {
    /// Arms a timer that fires every `period`, first after one `period`.
    pub fn every(period: Duration) -> Self {
        Timer {
            rx: tick(period),
            period: Some(period),
        }
    }

    /// A timer that never fires.
    pub fn idle() -> Self {
        Timer {
            rx: never(),
            period: None,
        }
    }

    /// Stops the timer. Ticks already queued are discarded.
    pub fn cancel(&mut self) {
        self.rx = never();
        self.period = None;
    }

    /// `true` until cancelled.
    pub fn is_armed(&self) -> bool {
        self.period.is_some()
    }

    /// Firing period of an armed timer.
    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Receiver to select on. Clones share the same tick stream.
    pub fn receiver(&self) -> Receiver<Instant> {
        self.rx.clone()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::idle()
    }
}
