//! Dice for the forge toolkit.
//!
//! Provides the fixed die catalog (d4 through d100), a session-scoped dice
//! tray that the player fills one die at a time, and the [`DiceRoller`]
//! which rolls the tray (or an ad-hoc expression like `3d6`) and records
//! each outcome in a bounded history ledger.

pub mod catalog;
pub mod error;
pub mod expr;
pub mod outcome;
pub mod roller;
pub mod tray;

pub use catalog::{CATALOG, DieSpec};
pub use error::{DiceError, DiceResult};
pub use expr::{DiceExpr, MAX_COUNT, MAX_SIDES};
pub use outcome::{DieRoll, RollOutcome};
pub use roller::{DICE_HISTORY_CAP, DICE_HISTORY_KEY, DiceRoller};
pub use tray::{DiceTray, TrayDie, TrayDieId};
