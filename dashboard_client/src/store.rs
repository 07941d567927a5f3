//! Persistent watchlist storage.
//!
//! The watchlist is a JSON array of uppercase symbols kept under the
//! [`WATCHLIST_KEY`] key of a small key-value store. [`FileStore`] keeps one
//! file per key inside a data directory so the list survives restarts;
//! [`MemoryStore`] is the in-process variant.
//!
//! [`WatchlistStore`] is the single source of truth for the list: callers
//! re-read it with [`WatchlistStore::load`] before acting, and every mutation
//! is written through before the call returns.
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dashboard_common::{DashboardError, Result, Symbol};
use log::{debug, warn};

/// Key holding the watchlist.
pub const WATCHLIST_KEY: &str = "watchlist";

/// String key-value storage.
pub trait KeyValueStore {
    /// Value stored under `key`, `None` if never set.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Directory-backed store: the value of `key` lives in `<dir>/<key>.json`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the store in `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    /// Directory holding the files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with one item.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        MemoryStore { items }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Ordered, duplicate-free set of symbols persisted in a [`KeyValueStore`].
#[derive(Debug)]
pub struct WatchlistStore<S> {
    backend: S,
}

impl<S: KeyValueStore> WatchlistStore<S> {
    /// Wraps `backend`.
    pub fn new(backend: S) -> Self {
        WatchlistStore { backend }
    }

    /// Underlying key-value store.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Reads the persisted list in insertion order.
    ///
    /// Missing or unreadable data yields an empty list. Entries are
    /// re-normalized and duplicates dropped, keeping the first occurrence.
    pub fn load(&self) -> Vec<Symbol> {
        let raw = match self.backend.get_item(WATCHLIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Cannot read watchlist, treating it as empty: {}", e);
                return Vec::new();
            }
        };
        match parse_watchlist(&raw) {
            Ok(symbols) => symbols,
            Err(e) => {
                debug!("{}; treating watchlist as empty", e);
                Vec::new()
            }
        }
    }

    /// Overwrites the persisted list with `symbols`.
    pub fn save(&mut self, symbols: &[Symbol]) -> Result<()> {
        let json = serde_json::to_string(symbols)?;
        self.backend.set_item(WATCHLIST_KEY, &json)
    }

    /// Appends the normalized form of `raw` unless it is blank or already
    /// present. Returns `true` when the list changed.
    pub fn add(&mut self, raw: &str) -> Result<bool> {
        let Some(symbol) = Symbol::normalize(raw) else {
            return Ok(false);
        };
        let mut symbols = self.load();
        if symbols.contains(&symbol) {
            return Ok(false);
        }
        symbols.push(symbol);
        self.save(&symbols)?;
        Ok(true)
    }

    /// Removes the normalized form of `raw`. Absent symbols are a no-op.
    /// Returns `true` when the list changed.
    pub fn remove(&mut self, raw: &str) -> Result<bool> {
        let Some(symbol) = Symbol::normalize(raw) else {
            return Ok(false);
        };
        let mut symbols = self.load();
        let before = symbols.len();
        symbols.retain(|s| s != &symbol);
        if symbols.len() == before {
            return Ok(false);
        }
        self.save(&symbols)?;
        Ok(true)
    }
}

fn parse_watchlist(raw: &str) -> Result<Vec<Symbol>> {
    let entries: Vec<String> =
        serde_json::from_str(raw).map_err(|e| DashboardError::Parse(e.to_string()))?;
    let mut symbols: Vec<Symbol> = Vec::with_capacity(entries.len());
    for symbol in entries.iter().filter_map(|entry| Symbol::normalize(entry)) {
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }
    Ok(symbols)
}
