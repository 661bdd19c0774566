//! The forge oracle.
//!
//! Answers yes/no questions from one of two tables: a likelihood table over
//! a single d6, or a narrative table over 2d6 whose "but"/"and" rows carry
//! a complication. Also provides inspiration draws, verb + noun prompts and
//! random events, and an [`OracleSession`] that keeps the recent history.

pub mod entry;
pub mod error;
pub mod event;
pub mod likelihood;
pub mod narrative;
pub mod prompt;
pub mod resolver;
pub mod session;
pub mod tables;

pub use entry::{OracleEntry, OracleOutcome};
pub use error::{OracleError, OracleResult};
pub use event::{RandomEvent, generate_random_event};
pub use likelihood::{Likelihood, LikelihoodOracle, Modifier, YesNo, resolve_likelihood};
pub use narrative::{NARRATIVE_TABLE, NarrativeOracle, NarrativeRow, narrative_row};
pub use prompt::VerbNoun;
pub use resolver::{OracleVariant, Resolver};
pub use session::{ORACLE_HISTORY_CAP, ORACLE_HISTORY_KEY, OracleSession};
pub use tables::pick_inspiration;
