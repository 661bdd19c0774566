//! The fixed catalog of dice a tray may hold.

/// A catalog entry: one standard polyhedral die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DieSpec {
    /// Display name, e.g. `d20`.
    pub name: &'static str,
    /// Number of faces.
    pub sides: u32,
    /// Image shown on the die's button.
    pub image_ref: &'static str,
}

/// Every die the tray accepts, smallest first.
pub static CATALOG: [DieSpec; 7] = [
    DieSpec {
        name: "d4",
        sides: 4,
        image_ref: "d4.png",
    },
    DieSpec {
        name: "d6",
        sides: 6,
        image_ref: "d6_2.png",
    },
    DieSpec {
        name: "d8",
        sides: 8,
        image_ref: "d8.png",
    },
    DieSpec {
        name: "d10",
        sides: 10,
        image_ref: "d10_2.png",
    },
    DieSpec {
        name: "d12",
        sides: 12,
        image_ref: "d12.png",
    },
    DieSpec {
        name: "d20",
        sides: 20,
        image_ref: "d20.png",
    },
    DieSpec {
        name: "d100",
        sides: 100,
        image_ref: "d10_3.png",
    },
];

impl DieSpec {
    /// Look up the catalog die with `sides` faces.
    pub fn by_sides(sides: u32) -> Option<&'static DieSpec> {
        CATALOG.iter().find(|d| d.sides == sides)
    }

    /// Look up a catalog die by name, ignoring case (`"D20"` finds d20).
    pub fn by_name(name: &str) -> Option<&'static DieSpec> {
        let name = name.trim();
        CATALOG.iter().find(|d| d.name.eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for DieSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_and_valid() {
        let sides: Vec<u32> = CATALOG.iter().map(|d| d.sides).collect();
        assert_eq!(sides, vec![4, 6, 8, 10, 12, 20, 100]);
        for d in &CATALOG {
            assert!(d.sides >= forge_core::MIN_SIDES);
            assert_eq!(d.name, format!("d{}", d.sides));
        }
    }

    #[test]
    fn lookup_by_sides() {
        assert_eq!(DieSpec::by_sides(20).map(|d| d.name), Some("d20"));
        assert_eq!(DieSpec::by_sides(100).map(|d| d.image_ref), Some("d10_3.png"));
        assert!(DieSpec::by_sides(7).is_none());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(DieSpec::by_name("D6").map(|d| d.sides), Some(6));
        assert_eq!(DieSpec::by_name(" d12 ").map(|d| d.sides), Some(12));
        assert!(DieSpec::by_name("d30").is_none());
    }
}
