//! Roll outcomes and aggregation.

use serde::{Deserialize, Serialize};

/// One die's face in a roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieRoll {
    /// The die's name, e.g. `d20`.
    pub die: String,
    /// The value rolled (1 to the die's sides).
    pub result: u32,
}

/// The result of one combined roll. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Per-die results in roll order.
    pub per_die: Vec<DieRoll>,
    /// Sum of every per-die result, widened so it cannot overflow.
    pub total: u64,
    /// Human-readable description of the dice, e.g. `2d6, d20`.
    pub summary: String,
    /// Local time of the roll.
    pub timestamp: String,
}

impl RollOutcome {
    /// Build an outcome from already-drawn results. `total` is their sum.
    pub fn new(per_die: Vec<DieRoll>, timestamp: impl Into<String>) -> Self {
        let total = per_die.iter().map(|r| u64::from(r.result)).sum();
        let summary = summarize(per_die.iter().map(|r| r.die.as_str()));
        Self {
            per_die,
            total,
            summary,
            timestamp: timestamp.into(),
        }
    }

    /// The raw values in roll order.
    pub fn values(&self) -> Vec<u32> {
        self.per_die.iter().map(|r| r.result).collect()
    }

    /// Values grouped per die name: `2d6: 3,5, d20: 17`.
    pub fn grouped_display(&self) -> String {
        group(self.per_die.iter().map(|r| (r.die.as_str(), r.result)))
            .into_iter()
            .map(|(name, values)| {
                let vals: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                format!("{}: {}", group_label(name, values.len()), vals.join(","))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of dice rolled.
    pub fn count(&self) -> usize {
        self.per_die.len()
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values().iter().map(|v| v.to_string()).collect();
        write!(f, "{}: [{}] = {}", self.summary, values.join(", "), self.total)
    }
}

/// `d6` for one die, `3d6` for several.
pub(crate) fn group_label(name: &str, count: usize) -> String {
    if count > 1 {
        format!("{count}{name}")
    } else {
        name.to_string()
    }
}

/// Comma-joined group labels in first-appearance order: `2d6, d20`.
pub(crate) fn summarize<'a>(names: impl Iterator<Item = &'a str>) -> String {
    group(names.map(|n| (n, ())))
        .into_iter()
        .map(|(name, members)| group_label(name, members.len()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn group<'a, V>(items: impl Iterator<Item = (&'a str, V)>) -> Vec<(&'a str, Vec<V>)> {
    let mut groups: Vec<(&str, Vec<V>)> = Vec::new();
    for (name, value) in items {
        match groups.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value),
            None => groups.push((name, vec![value])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolls(values: &[(&str, u32)]) -> Vec<DieRoll> {
        values
            .iter()
            .map(|(die, result)| DieRoll {
                die: die.to_string(),
                result: *result,
            })
            .collect()
    }

    #[test]
    fn total_is_sum_of_results() {
        let o = RollOutcome::new(rolls(&[("d20", 15), ("d20", 8)]), "12:00:00");
        assert_eq!(o.total, 23);
        assert_eq!(o.count(), 2);
    }

    #[test]
    fn total_does_not_overflow_on_large_faces() {
        let o = RollOutcome::new(rolls(&[("d?", u32::MAX), ("d?", u32::MAX)]), "12:00:00");
        assert_eq!(o.total, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn summary_groups_in_first_appearance_order() {
        let o = RollOutcome::new(
            rolls(&[("d6", 3), ("d20", 17), ("d6", 5), ("d4", 1)]),
            "12:00:00",
        );
        assert_eq!(o.summary, "2d6, d20, d4");
        assert_eq!(o.grouped_display(), "2d6: 3,5, d20: 17, d4: 1");
    }

    #[test]
    fn empty_outcome_sums_to_zero() {
        let o = RollOutcome::new(Vec::new(), "12:00:00");
        assert_eq!(o.total, 0);
        assert_eq!(o.summary, "");
    }

    #[test]
    fn display() {
        let o = RollOutcome::new(rolls(&[("d6", 3), ("d6", 5)]), "12:00:00");
        assert_eq!(o.to_string(), "2d6: [3, 5] = 8");
    }

    #[test]
    fn serde_roundtrip() {
        let o = RollOutcome::new(rolls(&[("d8", 7)]), "09:30:00");
        let json = serde_json::to_string(&o).unwrap();
        let back: RollOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, o);
    }
}
