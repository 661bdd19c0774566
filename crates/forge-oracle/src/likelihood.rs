//! The likelihood oracle: one d6 against a threshold.
//!
//! Each likelihood names the lowest d6 face that answers "Yes", giving odds
//! from 1/6 (Impossible) to 5/6 (Certain). An optional modifier d6 colours
//! the answer: a 1 adds ", but", a 6 adds ", and", and matching faces on
//! both dice make a random event available.

use forge_core::{RandomSource, roll_die, timestamp_label};
use serde::{Deserialize, Serialize};

use crate::entry::OracleOutcome;
use crate::error::{OracleError, OracleResult};

/// How likely the asker thinks "Yes" is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Likelihood {
    /// 1/6 chance of Yes.
    Impossible,
    /// 2/6 chance of Yes.
    Unlikely,
    /// 3/6 chance of Yes.
    EvenOdds,
    /// 4/6 chance of Yes.
    Likely,
    /// 5/6 chance of Yes.
    Certain,
}

impl Likelihood {
    /// Parse a likelihood from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "impossible" => Some(Self::Impossible),
            "unlikely" => Some(Self::Unlikely),
            "even odds" | "evenodds" | "even" | "50/50" | "5050" => Some(Self::EvenOdds),
            "likely" => Some(Self::Likely),
            "certain" => Some(Self::Certain),
            _ => None,
        }
    }

    /// Parse, failing with a descriptive error.
    pub fn parse_or_err(s: &str) -> OracleResult<Self> {
        Self::parse(s).ok_or_else(|| OracleError::InvalidLikelihood(s.trim().to_string()))
    }

    /// All likelihoods from least to most likely.
    pub fn all() -> &'static [Self] {
        &[
            Self::Impossible,
            Self::Unlikely,
            Self::EvenOdds,
            Self::Likely,
            Self::Certain,
        ]
    }

    /// The lowest d6 face that answers "Yes".
    pub fn threshold(self) -> u32 {
        match self {
            Self::Impossible => 6,
            Self::Unlikely => 5,
            Self::EvenOdds => 4,
            Self::Likely => 3,
            Self::Certain => 2,
        }
    }

    /// The odds of "Yes", e.g. `3/6 chance for Yes`.
    pub fn odds(self) -> String {
        format!("{}/6 chance for Yes", 7 - self.threshold())
    }
}

impl std::fmt::Display for Likelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Impossible => write!(f, "Impossible"),
            Self::Unlikely => write!(f, "Unlikely"),
            Self::EvenOdds => write!(f, "Even Odds"),
            Self::Likely => write!(f, "Likely"),
            Self::Certain => write!(f, "Certain"),
        }
    }
}

/// A bare yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    /// Affirmative.
    Yes,
    /// Negative.
    No,
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

/// Colour added to an answer by the modifier die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    /// The answer comes with a drawback.
    But,
    /// The answer comes with something extra.
    And,
}

impl Modifier {
    /// The modifier for a modifier-die face: 1 is "but", 6 is "and".
    pub fn from_roll(roll: u32) -> Option<Self> {
        match roll {
            1 => Some(Self::But),
            6 => Some(Self::And),
            _ => None,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::But => ", but",
            Self::And => ", and",
        }
    }
}

/// Resolve a d6 `roll` for `likelihood`: "Yes" when it meets the threshold.
pub fn resolve_likelihood(likelihood: Likelihood, roll: u32) -> YesNo {
    if roll >= likelihood.threshold() {
        YesNo::Yes
    } else {
        YesNo::No
    }
}

/// The likelihood-threshold oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct LikelihoodOracle {
    modifier_die: bool,
}

impl LikelihoodOracle {
    /// An oracle rolling a single d6.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also roll a modifier d6 with every question.
    pub fn with_modifier_die(mut self, enabled: bool) -> Self {
        self.modifier_die = enabled;
        self
    }

    /// Whether the modifier die is rolled.
    pub fn modifier_die(&self) -> bool {
        self.modifier_die
    }

    /// Ask a question at `likelihood`.
    pub fn ask<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
        likelihood: Likelihood,
    ) -> OracleResult<OracleOutcome> {
        let roll = roll_die(source, 6)?;
        let modifier_roll = if self.modifier_die {
            Some(roll_die(source, 6)?)
        } else {
            None
        };

        let mut answer = resolve_likelihood(likelihood, roll).to_string();
        if let Some(m) = modifier_roll.and_then(Modifier::from_roll) {
            answer.push_str(m.suffix());
        }

        Ok(OracleOutcome {
            answer,
            likelihood: Some(likelihood),
            roll,
            dice: std::iter::once(roll).chain(modifier_roll).collect(),
            threshold: Some(likelihood.threshold()),
            complication: None,
            modifier_roll,
            random_event: modifier_roll == Some(roll),
            timestamp: timestamp_label(),
        })
    }
}
