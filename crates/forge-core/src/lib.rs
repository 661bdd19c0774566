//! Shared primitives for the forge table-top toolkit.
//!
//! Provides the randomization engine that every widget draws from, an
//! injectable [`RandomSource`] so rolls can be made deterministic in tests,
//! and the wall-clock labels stamped onto history entries.

pub mod error;
pub mod random;
pub mod time;

pub use error::{CoreError, CoreResult};
pub use random::{
    MIN_SIDES, RandomSource, ScriptedRandom, SeededRandom, pick, roll_die, roll_multiple,
};
pub use time::{format_timestamp, timestamp_label};
