//! Durable key-value storage backends.
//!
//! The storage contract is `get`, `set` and `remove` on
//! string values under fixed string keys, one key per widget.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{LedgerError, LedgerResult};

/// An opaque string store keyed by widget.
pub trait KeyValueStore {
    /// Read the value for `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> LedgerResult<()>;

    /// Erase `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> LedgerResult<()>;
}

/// An in-process store.
///
/// Clones share the same map, which lets a test "reload" a widget against
/// the storage a previous instance wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

/// A store that keeps each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the stored files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> LedgerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(LedgerError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(LedgerError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|source| LedgerError::Io {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(&path, value).map_err(|source| LedgerError::Io { path, source })
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(LedgerError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_get_set_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("dice-history").unwrap(), None);
        store.set("dice-history", "[]").unwrap();
        assert_eq!(store.get("dice-history").unwrap().as_deref(), Some("[]"));
        store.remove("dice-history").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn memory_store_clones_share_state() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn file_store_round_trips_and_creates_dir() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("nested"));
        store.set("oracle-history", "[1]").unwrap();
        assert!(tmp.path().join("nested/oracle-history.json").exists());
        assert_eq!(store.get("oracle-history").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn file_store_missing_key_is_none_and_remove_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert_eq!(store.get("dice-history").unwrap(), None);
        store.remove("dice-history").unwrap();
        store.remove("dice-history").unwrap();
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert!(matches!(
            store.set("../escape", "x"),
            Err(LedgerError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(LedgerError::InvalidKey(_))));
    }
}
