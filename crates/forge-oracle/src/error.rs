//! Error types for the oracle.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while consulting the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// Invalid likelihood string.
    #[error("invalid likelihood: {0} (try certain, likely, even, unlikely or impossible)")]
    InvalidLikelihood(String),

    /// The likelihood table was consulted without a likelihood.
    #[error("this oracle needs a likelihood")]
    MissingLikelihood,

    /// A prompt half was rerolled before any prompt was drawn.
    #[error("no verb + noun prompt to reroll")]
    NoPrompt,

    /// The randomization engine rejected the request.
    #[error(transparent)]
    Core(#[from] forge_core::CoreError),
}
