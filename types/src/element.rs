//! Periodic table element records.

use serde::Serialize;
use std::fmt;

/// Chemical family used for grouping and coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    Nonmetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    Metalloid,
    Halogen,
    TransitionMetal,
    PostTransitionMetal,
    Lanthanide,
    Actinide,
    Unknown,
}

impl ElementCategory {
    pub const ALL: [ElementCategory; 11] = [
        ElementCategory::Nonmetal,
        ElementCategory::NobleGas,
        ElementCategory::AlkaliMetal,
        ElementCategory::AlkalineEarthMetal,
        ElementCategory::Metalloid,
        ElementCategory::Halogen,
        ElementCategory::TransitionMetal,
        ElementCategory::PostTransitionMetal,
        ElementCategory::Lanthanide,
        ElementCategory::Actinide,
        ElementCategory::Unknown,
    ];

    /// Wire identifier (`noble-gas`, `transition-metal`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementCategory::Nonmetal => "nonmetal",
            ElementCategory::NobleGas => "noble-gas",
            ElementCategory::AlkaliMetal => "alkali-metal",
            ElementCategory::AlkalineEarthMetal => "alkaline-earth-metal",
            ElementCategory::Metalloid => "metalloid",
            ElementCategory::Halogen => "halogen",
            ElementCategory::TransitionMetal => "transition-metal",
            ElementCategory::PostTransitionMetal => "post-transition-metal",
            ElementCategory::Lanthanide => "lanthanide",
            ElementCategory::Actinide => "actinide",
            ElementCategory::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ElementCategory::Nonmetal => "Nonmetal",
            ElementCategory::NobleGas => "Noble Gas",
            ElementCategory::AlkaliMetal => "Alkali Metal",
            ElementCategory::AlkalineEarthMetal => "Alkaline Earth",
            ElementCategory::Metalloid => "Metalloid",
            ElementCategory::Halogen => "Halogen",
            ElementCategory::TransitionMetal => "Transition",
            ElementCategory::PostTransitionMetal => "Post-Transition",
            ElementCategory::Lanthanide => "Lanthanide",
            ElementCategory::Actinide => "Actinide",
            ElementCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1-based cell in the 18-column, 10-row display grid.
///
/// Rows 1-7 are the periods, row 8 is a spacer, rows 9 and 10 hold the
/// lanthanide and actinide series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub row: u8,
    pub col: u8,
}

impl GridPosition {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

const LANTHANIDE_ROW: u8 = 9;
const ACTINIDE_ROW: u8 = 10;
const F_BLOCK_FIRST_COLUMN: u8 = 4;

/// Static descriptor of one periodic-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_mass: &'static str,
    pub category: ElementCategory,
    pub group: u8,
    pub period: u8,
}

impl ElementRecord {
    #[must_use]
    pub const fn new(
        number: u8,
        symbol: &'static str,
        name: &'static str,
        atomic_mass: &'static str,
        category: ElementCategory,
        group: u8,
        period: u8,
    ) -> Self {
        Self {
            number,
            symbol,
            name,
            atomic_mass,
            category,
            group,
            period,
        }
    }

    /// Where this element sits in the display grid.
    #[must_use]
    pub const fn grid_position(&self) -> GridPosition {
        match self.category {
            ElementCategory::Lanthanide => {
                GridPosition::new(LANTHANIDE_ROW, self.number - 57 + F_BLOCK_FIRST_COLUMN)
            }
            ElementCategory::Actinide => {
                GridPosition::new(ACTINIDE_ROW, self.number - 89 + F_BLOCK_FIRST_COLUMN)
            }
            _ => GridPosition::new(self.period, self.group),
        }
    }

    /// Atomic mass rounded to the nearest integer, for compact cells.
    #[must_use]
    pub fn rounded_mass(&self) -> Option<u32> {
        let mass: f64 = self
            .atomic_mass
            .trim_matches(|c| c == '[' || c == ']')
            .parse()
            .ok()?;
        Some(mass.round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementCategory, ElementRecord, GridPosition};

    const CARBON: ElementRecord = ElementRecord::new(
        6,
        "C",
        "Carbon",
        "12.011",
        ElementCategory::Nonmetal,
        14,
        2,
    );

    #[test]
    fn main_table_position_is_period_and_group() {
        assert_eq!(CARBON.grid_position(), GridPosition::new(2, 14));
    }

    #[test]
    fn lanthanum_starts_the_lanthanide_row() {
        let la = ElementRecord::new(
            57,
            "La",
            "Lanthanum",
            "138.91",
            ElementCategory::Lanthanide,
            3,
            6,
        );
        assert_eq!(la.grid_position(), GridPosition::new(9, 4));
    }

    #[test]
    fn lawrencium_ends_the_actinide_row() {
        let lr = ElementRecord::new(
            103,
            "Lr",
            "Lawrencium",
            "266",
            ElementCategory::Actinide,
            3,
            7,
        );
        assert_eq!(lr.grid_position(), GridPosition::new(10, 18));
    }

    #[test]
    fn rounded_mass_handles_brackets() {
        assert_eq!(CARBON.rounded_mass(), Some(12));
        let tc = ElementRecord::new(
            43,
            "Tc",
            "Technetium",
            "[98]",
            ElementCategory::TransitionMetal,
            7,
            5,
        );
        assert_eq!(tc.rounded_mass(), Some(98));
    }

    #[test]
    fn category_serializes_kebab_case() {
        let json = serde_json::to_string(&ElementCategory::AlkalineEarthMetal).unwrap();
        assert_eq!(json, "\"alkaline-earth-metal\"");
        for category in ElementCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
