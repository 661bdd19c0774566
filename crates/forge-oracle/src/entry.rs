//! Oracle outcomes and history entries.

use serde::{Deserialize, Serialize};

use crate::likelihood::Likelihood;

/// The result of one oracle question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleOutcome {
    /// The answer text, e.g. `Yes, but` or `Likely yes`.
    pub answer: String,
    /// The likelihood asked at (likelihood table only).
    pub likelihood: Option<Likelihood>,
    /// The deciding value: the d6 face, or the 2d6 sum.
    pub roll: u32,
    /// Every die face drawn for the answer, in order.
    pub dice: Vec<u32>,
    /// The lowest "Yes" face (likelihood table only).
    pub threshold: Option<u32>,
    /// A complication drawn for qualified narrative answers.
    pub complication: Option<String>,
    /// The modifier die, when rolled.
    pub modifier_roll: Option<u32>,
    /// Whether the roll makes a random event available.
    pub random_event: bool,
    /// Local time of the question.
    pub timestamp: String,
}

impl OracleOutcome {
    /// The roll details line, e.g. `(Likely) Roll: 4,6` or `Roll: 3+4 = 7`.
    pub fn details(&self) -> String {
        let dice: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        match self.likelihood {
            Some(l) => format!("({l}) Roll: {}", dice.join(",")),
            None => format!("Roll: {} = {}", dice.join("+"), self.roll),
        }
    }
}

impl std::fmt::Display for OracleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.answer)?;
        if let Some(c) = &self.complication {
            write!(f, " ({c})")?;
        }
        Ok(())
    }
}

/// One line of the oracle history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OracleEntry {
    /// A yes/no question and its answer.
    Question(OracleOutcome),
    /// A random event roll.
    RandomEvent {
        /// The event text.
        result: String,
        /// The focus d6.
        focus_roll: u32,
        /// The spin d6.
        effect_roll: u32,
        /// Local time of the roll.
        timestamp: String,
    },
    /// A verb + noun prompt.
    Prompt {
        /// The prompt text.
        result: String,
        /// Whether one half was rerolled.
        rerolled: bool,
        /// Local time of the draw.
        timestamp: String,
    },
}

impl OracleEntry {
    /// The headline text of the entry.
    pub fn headline(&self) -> String {
        match self {
            Self::Question(outcome) => outcome.to_string(),
            Self::RandomEvent { result, .. } => result.clone(),
            Self::Prompt {
                result, rerolled, ..
            } => {
                if *rerolled {
                    format!("{result} (Re-rolled)")
                } else {
                    result.clone()
                }
            }
        }
    }

    /// The details line shown under the headline.
    pub fn details(&self) -> String {
        match self {
            Self::Question(outcome) => format!("{} • {}", outcome.details(), outcome.timestamp),
            Self::RandomEvent { timestamp, .. } => format!("Random Event • {timestamp}"),
            Self::Prompt { timestamp, .. } => format!("Verb + Noun • {timestamp}"),
        }
    }
}
