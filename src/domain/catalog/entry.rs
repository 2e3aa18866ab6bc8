//! Catalog entry value objects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

/// Whether a component is counted or switched on and off.
///
/// A toggle is logically a counter bounded to `{0, 1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentKind {
    Counter { max: u32, default: u32 },
    Toggle { default: bool },
}

/// A selectable component for one furniture type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub key: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: ComponentKind,
}

impl ComponentEntry {
    /// Creates a counter entry.
    pub fn counter(key: &str, label: &str, max: u32, default: u32) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: ComponentKind::Counter { max, default },
        }
    }

    /// Creates a toggle entry.
    pub fn toggle(key: &str, label: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: ComponentKind::Toggle { default },
        }
    }

    /// Returns the maximum selectable quantity.
    pub fn max(&self) -> u32 {
        match self.kind {
            ComponentKind::Counter { max, .. } => max,
            ComponentKind::Toggle { .. } => 1,
        }
    }

    /// Returns the default quantity.
    pub fn default_quantity(&self) -> u32 {
        match self.kind {
            ComponentKind::Counter { default, .. } => default,
            ComponentKind::Toggle { default } => u32::from(default),
        }
    }

    /// Returns true for toggle-kind entries.
    pub fn is_toggle(&self) -> bool {
        matches!(self.kind, ComponentKind::Toggle { .. })
    }
}

/// A purchasable hardware item for one furniture type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareEntry {
    pub key: String,
    pub label: String,
    pub unit_price: Money,
    pub unit: String,
    pub max: u32,
}

impl HardwareEntry {
    pub fn new(key: &str, label: &str, unit_price: i64, unit: &str, max: u32) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            unit_price: Money::from_rupees(unit_price),
            unit: unit.to_string(),
            max,
        }
    }
}

/// A primary (carcass) material, priced per square foot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryMaterial {
    pub key: String,
    pub label: String,
    pub description: String,
    pub price_per_sqft: Money,
}

impl PrimaryMaterial {
    pub fn new(key: &str, label: &str, description: &str, price_per_sqft: i64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            price_per_sqft: Money::from_rupees(price_per_sqft),
        }
    }
}

/// A lamination finish, priced as a per-square-foot delta on the primary
/// material. The "none" option carries a zero delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lamination {
    pub key: String,
    pub label: String,
    pub price_delta: Money,
}

impl Lamination {
    pub fn new(key: &str, label: &str, price_delta: i64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            price_delta: Money::from_rupees(price_delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_max_is_one() {
        let entry = ComponentEntry::toggle("hanging_rod", "Hanging Rod", true);
        assert_eq!(entry.max(), 1);
        assert_eq!(entry.default_quantity(), 1);
        assert!(entry.is_toggle());
    }

    #[test]
    fn counter_reports_its_bounds() {
        let entry = ComponentEntry::counter("doors", "Doors", 6, 2);
        assert_eq!(entry.max(), 6);
        assert_eq!(entry.default_quantity(), 2);
        assert!(!entry.is_toggle());
    }

    #[test]
    fn component_entry_serializes_with_tagged_kind() {
        let entry = ComponentEntry::counter("doors", "Doors", 6, 2);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "counter");
        assert_eq!(json["max"], 6);

        let back: ComponentEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn hardware_entry_carries_unit_price() {
        let entry = HardwareEntry::new("hinges", "Hinges", 150, "pair", 12);
        assert_eq!(entry.unit_price, Money::from_rupees(150));
        assert_eq!(entry.unit, "pair");
    }
}
