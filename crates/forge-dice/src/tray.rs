//! The dice tray: dice queued for a single combined roll.

use forge_core::{RandomSource, roll_die, timestamp_label};

use crate::catalog::DieSpec;
use crate::error::{DiceError, DiceResult};
use crate::outcome::{DieRoll, RollOutcome, group_label};

/// Identifies one die in a tray. Never reused within a tray's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrayDieId(u64);

impl TrayDieId {
    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TrayDieId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for TrayDieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A die sitting in the tray.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayDie {
    /// Unique handle for removal.
    pub id: TrayDieId,
    /// The catalog entry this die was created from.
    pub spec: &'static DieSpec,
}

impl TrayDie {
    /// Faces on this die.
    pub fn sides(&self) -> u32 {
        self.spec.sides
    }

    /// The die's name, e.g. `d8`.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }
}

/// An ordered, session-scoped collection of dice.
#[derive(Debug, Clone, Default)]
pub struct DiceTray {
    dice: Vec<TrayDie>,
    next_id: u64,
}

impl DiceTray {
    /// An empty tray.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the catalog die with `sides` faces, returning its id.
    pub fn add(&mut self, sides: u32) -> DiceResult<TrayDieId> {
        let spec = DieSpec::by_sides(sides).ok_or(DiceError::UnknownDie(sides))?;
        self.next_id += 1;
        let id = TrayDieId(self.next_id);
        self.dice.push(TrayDie { id, spec });
        Ok(id)
    }

    /// Remove the die with `id`. Returns whether a die was removed.
    pub fn remove(&mut self, id: TrayDieId) -> bool {
        let before = self.dice.len();
        self.dice.retain(|d| d.id != id);
        self.dice.len() != before
    }

    /// Remove the most recently added die named `name`, if any.
    pub fn remove_named(&mut self, name: &str) -> Option<TrayDieId> {
        let id = self
            .dice
            .iter()
            .rev()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
            .map(|d| d.id)?;
        self.remove(id);
        Some(id)
    }

    /// Empty the tray. Ids keep counting up.
    pub fn clear(&mut self) {
        self.dice.clear();
    }

    /// The dice in insertion order.
    pub fn dice(&self) -> &[TrayDie] {
        &self.dice
    }

    /// Number of dice in the tray.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Whether the tray holds no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Dice counted per name, in first-appearance order.
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for die in &self.dice {
            match counts.iter_mut().find(|(n, _)| *n == die.name()) {
                Some((_, n)) => *n += 1,
                None => counts.push((die.name(), 1)),
            }
        }
        counts
    }

    /// The tray described as `2d6, d20`.
    pub fn describe(&self) -> String {
        self.counts()
            .into_iter()
            .map(|(name, n)| group_label(name, n))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Roll every die once, in insertion order. `None` for an empty tray.
    ///
    /// All faces are drawn before the total is reduced from them.
    pub fn roll<R: RandomSource + ?Sized>(&self, source: &mut R) -> DiceResult<Option<RollOutcome>> {
        if self.is_empty() {
            return Ok(None);
        }
        let per_die = self
            .dice
            .iter()
            .map(|d| {
                Ok(DieRoll {
                    die: d.name().to_string(),
                    result: roll_die(source, d.sides())?,
                })
            })
            .collect::<DiceResult<Vec<_>>>()?;
        Ok(Some(RollOutcome::new(per_die, timestamp_label())))
    }
}
