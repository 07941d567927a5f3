//! Request tokens used to drop stale responses.
//!
//! In-flight requests are never cancelled. Each request gets a token from a
//! monotonically increasing counter, and a response is applied only if its
//! token is newer than the last one applied for the same target.
use std::collections::HashMap;
use std::hash::Hash;

/// Token counter for a single target.
#[derive(Debug, Default)]
pub struct Sequencer {
    issued: u64,
    applied: u64,
}

impl Sequencer {
    /// Creates a counter with nothing issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for a new request.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Records `token` as applied. Returns `false` if an equal or newer token
    /// was applied already.
    pub fn accept(&mut self, token: u64) -> bool {
        if token <= self.applied {
            return false;
        }
        self.applied = token;
        true
    }
}

/// Token counter shared by many targets, tracking the applied token per key.
#[derive(Debug)]
pub struct KeyedSequencer<K> {
    issued: u64,
    applied: HashMap<K, u64>,
}

impl<K: Eq + Hash + Clone> KeyedSequencer<K> {
    /// Creates a counter with nothing issued.
    pub fn new() -> Self {
        KeyedSequencer {
            issued: 0,
            applied: HashMap::new(),
        }
    }

    /// Token for a new request.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Records `token` as applied for `key`.
    pub fn accept(&mut self, key: &K, token: u64) -> bool {
        match self.applied.get(key) {
            Some(&last) if token <= last => false,
            _ => {
                self.applied.insert(key.clone(), token);
                true
            }
        }
    }

    /// Drops bookkeeping for keys not in `keep`.
    pub fn retain(&mut self, keep: &[K]) {
        self.applied.retain(|key, _| keep.contains(key));
    }
}

impl<K: Eq + Hash + Clone> Default for KeyedSequencer<K> {
    fn default() -> Self {
        Self::new()
    }
}
