//! The dice roller: tray, last roll and roll history together.

use forge_core::{RandomSource, roll_multiple, timestamp_label};
use forge_ledger::{HistoryLedger, KeyValueStore, Persistence};

use crate::error::DiceResult;
use crate::expr::DiceExpr;
use crate::outcome::{DieRoll, RollOutcome};
use crate::tray::{DiceTray, TrayDieId};

/// How many rolls the dice history keeps.
pub const DICE_HISTORY_CAP: usize = 10;

/// Storage key for the dice history.
pub const DICE_HISTORY_KEY: &str = "dice-history";

/// Aggregates a dice tray into roll outcomes and remembers them.
#[derive(Debug)]
pub struct DiceRoller {
    tray: DiceTray,
    last_roll: Option<RollOutcome>,
    history: HistoryLedger<RollOutcome>,
}

impl DiceRoller {
    /// A roller recording into `history`.
    pub fn new(history: HistoryLedger<RollOutcome>) -> Self {
        Self {
            tray: DiceTray::new(),
            last_roll: None,
            history,
        }
    }

    /// A roller whose history lives only as long as it does.
    pub fn session_only() -> Self {
        Self::new(HistoryLedger::new(DICE_HISTORY_CAP))
    }

    /// A roller whose history is restored from and mirrored into `store`.
    pub fn durable(store: impl KeyValueStore + 'static) -> Self {
        Self::new(HistoryLedger::restore(
            DICE_HISTORY_CAP,
            Persistence::new(store, DICE_HISTORY_KEY),
        ))
    }

    /// Add the catalog die with `sides` faces to the tray.
    pub fn add_die(&mut self, sides: u32) -> DiceResult<TrayDieId> {
        let id = self.tray.add(sides)?;
        tracing::debug!(%id, sides, "added die to tray");
        Ok(id)
    }

    /// Remove one die from the tray. Unknown ids are ignored.
    pub fn remove_die(&mut self, id: TrayDieId) -> bool {
        self.tray.remove(id)
    }

    /// Empty the tray.
    pub fn clear_tray(&mut self) {
        self.tray.clear();
    }

    /// The current tray.
    pub fn tray(&self) -> &DiceTray {
        &self.tray
    }

    /// Mutable access to the tray for finer-grained edits.
    pub fn tray_mut(&mut self) -> &mut DiceTray {
        &mut self.tray
    }

    /// Roll the tray and record the outcome.
    ///
    /// An empty tray produces nothing and leaves the history untouched.
    pub fn roll_tray<R: RandomSource + ?Sized>(
        &mut self,
        source: &mut R,
    ) -> DiceResult<Option<RollOutcome>> {
        let Some(outcome) = self.tray.roll(source)? else {
            return Ok(None);
        };
        self.record(outcome.clone());
        Ok(Some(outcome))
    }

    /// Roll an expression like `3d6` outside the tray and record it.
    pub fn roll_custom<R: RandomSource + ?Sized>(
        &mut self,
        source: &mut R,
        expr: DiceExpr,
    ) -> DiceResult<RollOutcome> {
        let name = format!("d{}", expr.sides);
        let per_die = roll_multiple(source, expr.count as usize, expr.sides)?
            .into_iter()
            .map(|result| DieRoll {
                die: name.clone(),
                result,
            })
            .collect();
        let outcome = RollOutcome::new(per_die, timestamp_label());
        self.record(outcome.clone());
        Ok(outcome)
    }

    fn record(&mut self, outcome: RollOutcome) {
        tracing::debug!(summary = %outcome.summary, total = outcome.total, "rolled");
        self.last_roll = Some(outcome.clone());
        self.history.append(outcome);
    }

    /// The most recent roll of this session.
    pub fn last_roll(&self) -> Option<&RollOutcome> {
        self.last_roll.as_ref()
    }

    /// Past rolls, newest first.
    pub fn history(&self) -> &HistoryLedger<RollOutcome> {
        &self.history
    }

    /// Forget every past roll, including the last one.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.last_roll = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{ScriptedRandom, SeededRandom};
    use crate::error::DiceError;
    use forge_ledger::MemoryStore;

    #[test]
    fn roll_tray_records_outcome() {
        let mut roller = DiceRoller::session_only();
        roller.add_die(6).unwrap();
        roller.add_die(6).unwrap();
        roller.add_die(20).unwrap();
        let mut rng = SeededRandom::from_seed(42);
        let outcome = roller.roll_tray(&mut rng).unwrap().unwrap();
        assert_eq!(outcome.per_die.len(), 3);
        let sum: u64 = outcome.values().iter().map(|v| u64::from(*v)).sum();
        assert_eq!(outcome.total, sum);
        assert!((1..=6).contains(&outcome.per_die[0].result));
        assert!((1..=6).contains(&outcome.per_die[1].result));
        assert!((1..=20).contains(&outcome.per_die[2].result));
        assert_eq!(roller.last_roll(), Some(&outcome));
        assert_eq!(roller.history().len(), 1);
    }

    #[test]
    fn empty_tray_roll_changes_nothing() {
        let mut roller = DiceRoller::session_only();
        let mut rng = ScriptedRandom::constant(4);
        assert_eq!(roller.roll_tray(&mut rng).unwrap(), None);
        assert!(roller.history().is_empty());
        assert!(roller.last_roll().is_none());
    }

    #[test]
    fn tray_survives_rolling() {
        let mut roller = DiceRoller::session_only();
        roller.add_die(8).unwrap();
        let mut rng = ScriptedRandom::constant(4);
        roller.roll_tray(&mut rng).unwrap();
        roller.roll_tray(&mut rng).unwrap();
        assert_eq!(roller.tray().len(), 1);
        assert_eq!(roller.history().len(), 2);
    }

    #[test]
    fn history_caps_at_ten() {
        let mut roller = DiceRoller::session_only();
        roller.add_die(4).unwrap();
        let mut rng = ScriptedRandom::new([1, 2, 3, 4]);
        for _ in 0..12 {
            roller.roll_tray(&mut rng).unwrap();
        }
        assert_eq!(roller.history().len(), DICE_HISTORY_CAP);
    }

    #[test]
    fn custom_roll_labels_and_records() {
        let mut roller = DiceRoller::session_only();
        let mut rng = ScriptedRandom::new([3, 3, 6]);
        let outcome = roller
            .roll_custom(&mut rng, DiceExpr::parse("3d6").unwrap())
            .unwrap();
        assert_eq!(outcome.summary, "3d6");
        assert_eq!(outcome.total, 12);
        assert_eq!(roller.history().latest(), Some(&outcome));
    }

    #[test]
    fn custom_roll_of_largest_dice_sums_exactly() {
        let mut roller = DiceRoller::session_only();
        let mut rng = SeededRandom::from_seed(1);
        let outcome = roller
            .roll_custom(&mut rng, DiceExpr::parse("100d1000").unwrap())
            .unwrap();
        assert_eq!(outcome.count(), 100);
        assert!(outcome.values().iter().all(|v| (1..=1000).contains(v)));
        let sum: u64 = outcome.values().iter().map(|v| u64::from(*v)).sum();
        assert_eq!(outcome.total, sum);
    }

    #[test]
    fn oversized_custom_dice_never_reach_the_roller() {
        assert!(matches!(
            DiceExpr::parse("100d4000000000"),
            Err(DiceError::InvalidExpression(_))
        ));
        assert!(matches!(
            DiceExpr::parse("100d1001"),
            Err(DiceError::InvalidExpression(_))
        ));
    }

    #[test]
    fn clear_history_resets_last_roll() {
        let mut roller = DiceRoller::session_only();
        roller.add_die(12).unwrap();
        let mut rng = ScriptedRandom::constant(7);
        roller.roll_tray(&mut rng).unwrap();
        roller.clear_history();
        assert!(roller.history().is_empty());
        assert!(roller.last_roll().is_none());
        assert_eq!(roller.tray().len(), 1);
    }

    #[test]
    fn durable_history_reloads() {
        let store = MemoryStore::new();
        let mut roller = DiceRoller::durable(store.clone());
        roller.add_die(20).unwrap();
        let mut rng = ScriptedRandom::constant(17);
        roller.roll_tray(&mut rng).unwrap();

        let reloaded = DiceRoller::durable(store.clone());
        assert_eq!(reloaded.history().len(), 1);
        assert_eq!(reloaded.history().entries()[0].total, 17);
        assert!(reloaded.tray().is_empty());
    }
}
