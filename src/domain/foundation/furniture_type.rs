//! FurnitureType enum - the six configurable furniture categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The furniture categories offered by the quotation system.
///
/// `Other` doubles as the fallback category for catalog lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureType {
    Wardrobe,
    Kitchen,
    TvUnit,
    StudyTable,
    ShoeRack,
    Other,
}

impl FurnitureType {
    /// Returns all furniture types in display order.
    pub fn all() -> &'static [FurnitureType] {
        &[
            FurnitureType::Wardrobe,
            FurnitureType::Kitchen,
            FurnitureType::TvUnit,
            FurnitureType::StudyTable,
            FurnitureType::ShoeRack,
            FurnitureType::Other,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FurnitureType::Wardrobe => "Wardrobe",
            FurnitureType::Kitchen => "Kitchen Cabinet",
            FurnitureType::TvUnit => "TV Unit",
            FurnitureType::StudyTable => "Study Table",
            FurnitureType::ShoeRack => "Shoe Rack",
            FurnitureType::Other => "Other",
        }
    }
}

impl fmt::Display for FurnitureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_6_types() {
        assert_eq!(FurnitureType::all().len(), 6);
    }

    #[test]
    fn display_name_returns_readable_text() {
        assert_eq!(FurnitureType::Kitchen.display_name(), "Kitchen Cabinet");
        assert_eq!(FurnitureType::TvUnit.display_name(), "TV Unit");
    }

    #[test]
    fn serializes_to_snake_case_json() {
        let json = serde_json::to_string(&FurnitureType::TvUnit).unwrap();
        assert_eq!(json, "\"tv_unit\"");

        let json = serde_json::to_string(&FurnitureType::ShoeRack).unwrap();
        assert_eq!(json, "\"shoe_rack\"");
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let ty: FurnitureType = serde_json::from_str("\"study_table\"").unwrap();
        assert_eq!(ty, FurnitureType::StudyTable);
    }
}
