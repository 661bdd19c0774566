//! Ad-hoc dice expressions such as `d20` or `3d6`.

use crate::error::{DiceError, DiceResult};

/// The most dice a single expression may roll.
pub const MAX_COUNT: u32 = 100;

/// The most faces a single die in an expression may have.
pub const MAX_SIDES: u32 = 1000;

/// `count` dice with `sides` faces each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceExpr {
    /// How many dice to roll.
    pub count: u32,
    /// Faces per die.
    pub sides: u32,
}

impl DiceExpr {
    /// Build an expression, checking both bounds.
    pub fn new(count: u32, sides: u32) -> DiceResult<Self> {
        if count == 0 || count > MAX_COUNT {
            return Err(DiceError::InvalidExpression(format!(
                "dice count must be between 1 and {MAX_COUNT}, got {count}"
            )));
        }
        if sides < forge_core::MIN_SIDES {
            return Err(forge_core::CoreError::InvalidSides(sides).into());
        }
        if sides > MAX_SIDES {
            return Err(DiceError::InvalidExpression(format!(
                "dice sides must be between {} and {MAX_SIDES}, got {sides}",
                forge_core::MIN_SIDES
            )));
        }
        Ok(Self { count, sides })
    }

    /// Parse `d20`, `3d6`, `D100`. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> DiceResult<Self> {
        let lower = s.trim().to_lowercase();
        let invalid = || DiceError::InvalidExpression(s.trim().to_string());
        let (count, sides) = lower.split_once('d').ok_or_else(invalid)?;
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| invalid())?
        };
        let sides = sides.parse::<u32>().map_err(|_| invalid())?;
        Self::new(count, sides)
    }

    /// The label used in roll summaries: `d6` for one die, `3d6` otherwise.
    pub fn label(&self) -> String {
        if self.count == 1 {
            format!("d{}", self.sides)
        } else {
            format!("{}d{}", self.count, self.sides)
        }
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for DiceExpr {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_forms() {
        assert_eq!(DiceExpr::parse("d20"), Ok(DiceExpr { count: 1, sides: 20 }));
        assert_eq!(DiceExpr::parse("3d6"), Ok(DiceExpr { count: 3, sides: 6 }));
        assert_eq!(DiceExpr::parse(" D100 "), Ok(DiceExpr { count: 1, sides: 100 }));
        assert_eq!(DiceExpr::parse("2d30"), Ok(DiceExpr { count: 2, sides: 30 }));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(DiceExpr::parse("foo"), Err(DiceError::InvalidExpression(_))));
        assert!(matches!(DiceExpr::parse("3d"), Err(DiceError::InvalidExpression(_))));
        assert!(matches!(DiceExpr::parse("xd6"), Err(DiceError::InvalidExpression(_))));
        assert!(matches!(DiceExpr::parse("0d6"), Err(DiceError::InvalidExpression(_))));
        assert!(matches!(DiceExpr::parse("101d6"), Err(DiceError::InvalidExpression(_))));
    }

    #[test]
    fn parse_rejects_one_sided_die() {
        assert_eq!(
            DiceExpr::parse("d1"),
            Err(DiceError::Core(forge_core::CoreError::InvalidSides(1)))
        );
    }

    #[test]
    fn sides_are_capped() {
        assert_eq!(DiceExpr::parse("d1000"), Ok(DiceExpr { count: 1, sides: 1000 }));
        assert!(matches!(DiceExpr::parse("d1001"), Err(DiceError::InvalidExpression(_))));
        assert!(matches!(
            DiceExpr::parse("100d4000000000"),
            Err(DiceError::InvalidExpression(_))
        ));
        assert!(matches!(
            DiceExpr::new(1, u32::MAX),
            Err(DiceError::InvalidExpression(_))
        ));
    }

    #[test]
    fn label_and_display() {
        assert_eq!(DiceExpr::parse("d8").unwrap().to_string(), "d8");
        assert_eq!(DiceExpr::parse("4d8").unwrap().label(), "4d8");
        let parsed: DiceExpr = "2d12".parse().unwrap();
        assert_eq!(parsed.count, 2);
    }
}
