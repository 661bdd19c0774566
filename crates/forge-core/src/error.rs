//! Error types for the randomization engine.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the randomization engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A die was requested with fewer than two sides.
    #[error("a die needs at least 2 sides, got {0}")]
    InvalidSides(u32),
}
