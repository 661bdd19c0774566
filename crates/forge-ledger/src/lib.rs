//! History ledgers for the forge widgets.
//!
//! A [`HistoryLedger`] keeps the most recent entries of one widget,
//! newest first, truncated to a fixed cap. Durable ledgers mirror every
//! mutation into a [`KeyValueStore`]; storage trouble is logged and
//! swallowed so the in-memory ledger stays authoritative.

pub mod error;
pub mod ledger;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::{HistoryLedger, Persistence};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
