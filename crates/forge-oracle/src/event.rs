//! Random events: a focus and a spin, each from a d6.

use forge_core::{RandomSource, roll_die, timestamp_label};

use crate::entry::OracleEntry;
use crate::error::OracleResult;
use crate::tables::{EVENT_EFFECT, EVENT_FOCUS};

/// A generated random event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomEvent {
    /// What the event concerns.
    pub focus: &'static str,
    /// Whether it helps or hurts.
    pub effect: &'static str,
    /// The focus d6.
    pub focus_roll: u32,
    /// The spin d6.
    pub effect_roll: u32,
}

impl RandomEvent {
    /// The history entry for this event.
    pub fn to_entry(&self) -> OracleEntry {
        OracleEntry::RandomEvent {
            result: self.to_string(),
            focus_roll: self.focus_roll,
            effect_roll: self.effect_roll,
            timestamp: timestamp_label(),
        }
    }
}

impl std::fmt::Display for RandomEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with a {}", self.focus, self.effect)
    }
}

/// Roll a focus d6 then a spin d6.
pub fn generate_random_event<R: RandomSource + ?Sized>(source: &mut R) -> OracleResult<RandomEvent> {
    let focus_roll = roll_die(source, 6)?;
    let effect_roll = roll_die(source, 6)?;
    Ok(RandomEvent {
        focus: EVENT_FOCUS[(focus_roll - 1) as usize],
        effect: EVENT_EFFECT[(effect_roll - 1) as usize],
        focus_roll,
        effect_roll,
    })
}
