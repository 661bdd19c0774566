//! Error types for dice operations.

use thiserror::Error;

/// Result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Errors that can occur while building or rolling dice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// No catalog die has this many sides.
    #[error("no d{0} in the dice catalog (try d4, d6, d8, d10, d12, d20 or d100)")]
    UnknownDie(u32),

    /// A dice expression could not be parsed.
    #[error("invalid dice expression: {0}")]
    InvalidExpression(String),

    /// The randomization engine rejected the request.
    #[error(transparent)]
    Core(#[from] forge_core::CoreError),
}
