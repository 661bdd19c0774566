//! The narrative oracle: 2d6 summed onto a ten-row answer table.
//!
//! Rows are checked low to high and the first whose upper bound covers the
//! sum wins; the last row catches everything above 10. Rows that qualify
//! their answer ("Yes, but ...", "No, and ...") draw a complication.

use forge_core::{RandomSource, pick, roll_die, timestamp_label};

use crate::entry::OracleOutcome;
use crate::error::OracleResult;
use crate::tables::COMPLICATIONS;

/// One row of the narrative table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrativeRow {
    /// Highest 2d6 sum this row covers; `None` for the catch-all row.
    pub upper_bound: Option<u32>,
    /// The answer text.
    pub text: &'static str,
    /// Whether this answer draws a complication.
    pub has_complication: bool,
}

const fn row(upper_bound: Option<u32>, text: &'static str, has_complication: bool) -> NarrativeRow {
    NarrativeRow {
        upper_bound,
        text,
        has_complication,
    }
}

/// The answer table, from unconditional "Yes" to unconditional "No".
pub const NARRATIVE_TABLE: [NarrativeRow; 10] = [
    row(Some(2), "Yes, absolutely", false),
    row(Some(3), "Yes, but with a complication", true),
    row(Some(4), "Yes, and something unexpected happens", true),
    row(Some(5), "Likely yes", false),
    row(Some(6), "Possibly, depends on circumstances", false),
    row(Some(7), "Unclear, ask again differently", false),
    row(Some(8), "Unlikely", false),
    row(Some(9), "No, but there's an alternative", true),
    row(Some(10), "No, and there's a negative consequence", true),
    row(None, "Absolutely not", false),
];

/// The row a 2d6 `sum` lands on.
pub fn narrative_row(sum: u32) -> &'static NarrativeRow {
    NARRATIVE_TABLE
        .iter()
        .find(|r| r.upper_bound.is_none_or(|bound| sum <= bound))
        .unwrap_or(&NARRATIVE_TABLE[NARRATIVE_TABLE.len() - 1])
}

/// The two-dice narrative oracle. Takes no likelihood.
#[derive(Debug, Clone, Copy, Default)]
pub struct NarrativeOracle;

impl NarrativeOracle {
    /// Create the oracle.
    pub fn new() -> Self {
        Self
    }

    /// Roll 2d6 and read the answer, drawing a complication when the row
    /// calls for one.
    pub fn ask<R: RandomSource + ?Sized>(&self, source: &mut R) -> OracleResult<OracleOutcome> {
        let first = roll_die(source, 6)?;
        let second = roll_die(source, 6)?;
        let sum = first + second;
        let row = narrative_row(sum);

        let complication = if row.has_complication {
            pick(source, COMPLICATIONS).map(|c| c.to_string())
        } else {
            None
        };

        Ok(OracleOutcome {
            answer: row.text.to_string(),
            likelihood: None,
            roll: sum,
            dice: vec![first, second],
            threshold: None,
            complication,
            modifier_roll: None,
            random_event: false,
            timestamp: timestamp_label(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{ScriptedRandom, SeededRandom};

    #[test]
    fn sums_map_to_rows_in_order() {
        for sum in 2..=10 {
            assert_eq!(narrative_row(sum).text, NARRATIVE_TABLE[(sum - 2) as usize].text);
        }
        assert_eq!(narrative_row(11).text, "Absolutely not");
        assert_eq!(narrative_row(12).text, "Absolutely not");
    }

    #[test]
    fn out_of_range_sums_land_on_the_edges() {
        assert_eq!(narrative_row(0).text, "Yes, absolutely");
        assert_eq!(narrative_row(99).text, "Absolutely not");
    }

    #[test]
    fn complication_flags_match_qualified_answers() {
        for r in &NARRATIVE_TABLE {
            let qualified = r.text.contains("but") || r.text.contains("and");
            assert_eq!(r.has_complication, qualified, "{}", r.text);
        }
    }

    #[test]
    fn snake_eyes_is_yes_without_complication() {
        let mut rng = ScriptedRandom::constant(1);
        let out = NarrativeOracle::new().ask(&mut rng).unwrap();
        assert_eq!(out.roll, 2);
        assert_eq!(out.answer, "Yes, absolutely");
        assert_eq!(out.complication, None);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn boxcars_is_no_without_complication() {
        let mut rng = ScriptedRandom::constant(6);
        let out = NarrativeOracle::new().ask(&mut rng).unwrap();
        assert_eq!(out.roll, 12);
        assert_eq!(out.answer, "Absolutely not");
        assert_eq!(out.complication, None);
    }

    #[test]
    fn qualified_answer_draws_complication() {
        // 1 + 2 = 3 lands on "Yes, but ..."; the third draw picks the complication.
        let mut rng = ScriptedRandom::new([1, 2, 4]);
        let out = NarrativeOracle::new().ask(&mut rng).unwrap();
        assert_eq!(out.answer, "Yes, but with a complication");
        assert_eq!(out.complication.as_deref(), Some("But someone gets hurt"));
        assert_eq!(out.dice, vec![1, 2]);
    }

    #[test]
    fn complications_always_come_from_the_table() {
        let mut rng = SeededRandom::from_seed(8);
        for _ in 0..500 {
            let out = NarrativeOracle::new().ask(&mut rng).unwrap();
            assert!((2..=12).contains(&out.roll));
            match &out.complication {
                Some(c) => {
                    assert!(narrative_row(out.roll).has_complication);
                    assert!(COMPLICATIONS.contains(&c.as_str()));
                }
                None => assert!(!narrative_row(out.roll).has_complication),
            }
        }
    }
}
