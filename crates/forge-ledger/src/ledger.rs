//! The bounded, newest-first history ledger.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::LedgerResult;
use crate::storage::KeyValueStore;

/// Where a durable ledger mirrors its entries.
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl Persistence {
    /// Mirror into `store` under `key`.
    pub fn new(store: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            key: key.into(),
        }
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn load<T: DeserializeOwned>(&self) -> LedgerResult<Option<Vec<T>>> {
        match self.store.get(&self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&self, entries: &[T]) -> LedgerResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(&self.key, &raw)
    }

    fn erase(&self) -> LedgerResult<()> {
        self.store.remove(&self.key)
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").field("key", &self.key).finish()
    }
}

/// The most recent `cap` entries of a widget, newest first.
///
/// The ledger never holds more than `cap` entries. Durable ledgers write the
/// whole sequence back to storage on every append and erase the key on
/// clear; a failing store only costs durability.
#[derive(Debug)]
pub struct HistoryLedger<T> {
    entries: Vec<T>,
    cap: usize,
    persistence: Option<Persistence>,
}

impl<T: Serialize + DeserializeOwned> HistoryLedger<T> {
    /// An empty session-only ledger.
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap,
            persistence: None,
        }
    }

    /// A durable ledger seeded from whatever `persistence` holds.
    ///
    /// Missing, unreadable or malformed data yields an empty ledger.
    pub fn restore(cap: usize, persistence: Persistence) -> Self {
        let initial = match persistence.load::<T>() {
            Ok(Some(entries)) => {
                tracing::debug!(key = persistence.key(), count = entries.len(), "restored history");
                entries
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = persistence.key(), error = %e, "failed to load history, starting empty");
                Vec::new()
            }
        };
        let mut ledger = Self {
            entries: Vec::new(),
            cap,
            persistence: Some(persistence),
        };
        ledger.seed(initial);
        ledger
    }

    /// Replace the contents with `entries` (newest first), truncated to the cap.
    ///
    /// Used at widget start-up; nothing is written back to storage.
    pub fn seed(&mut self, mut entries: Vec<T>) {
        entries.truncate(self.cap);
        self.entries = entries;
    }

    /// Prepend `entry`, dropping the oldest entries beyond the cap.
    pub fn append(&mut self, entry: T) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.cap);
        if let Some(p) = &self.persistence {
            if let Err(e) = p.save(&self.entries) {
                tracing::warn!(key = p.key(), error = %e, "failed to save history");
            }
        }
    }

    /// Empty the ledger, erasing its storage key if durable.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Some(p) = &self.persistence {
            if let Err(e) = p.erase() {
                tracing::warn!(key = p.key(), error = %e, "failed to clear stored history");
            }
        }
    }
}

impl<T> HistoryLedger<T> {
    /// All entries, newest first.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// The newest entry.
    pub fn latest(&self) -> Option<&T> {
        self.entries.first()
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The maximum number of entries kept.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Whether mutations are mirrored to storage.
    pub fn is_durable(&self) -> bool {
        self.persistence.is_some()
    }
}
