//! Hardware selector - priced fittings for one furniture type.

use std::collections::BTreeMap;

use crate::domain::catalog::HardwareEntry;
use crate::domain::foundation::{DomainError, Money};

/// Map from hardware key to selected quantity.
pub type HardwareSelection = BTreeMap<String, u32>;

/// Holds the hardware quantities chosen for the active furniture type.
///
/// Unlike components, hardware starts from zero; the catalog clamp is
/// re-applied on every mutation.
#[derive(Debug, Clone)]
pub struct HardwareSelector {
    entries: Vec<HardwareEntry>,
    quantities: HardwareSelection,
}

impl HardwareSelector {
    /// Creates a selector with every entry at zero.
    pub fn new(entries: &[HardwareEntry]) -> Self {
        let quantities = entries.iter().map(|e| (e.key.clone(), 0)).collect();
        Self {
            entries: entries.to_vec(),
            quantities,
        }
    }

    /// Creates a selector seeded from a prior selection, clamped per entry.
    /// Prior keys unknown to the catalog are dropped.
    pub fn with_initial(entries: &[HardwareEntry], prior: &HardwareSelection) -> Self {
        let quantities = entries
            .iter()
            .map(|e| {
                let qty = prior.get(&e.key).map(|q| (*q).min(e.max)).unwrap_or(0);
                (e.key.clone(), qty)
            })
            .collect();
        Self {
            entries: entries.to_vec(),
            quantities,
        }
    }

    /// Sets the quantity for a key, clamping into `[0, max]`.
    ///
    /// # Errors
    ///
    /// `UnknownOptionKey` if the key is not in the active catalog.
    pub fn set(&mut self, key: &str, raw_quantity: i64) -> Result<(), DomainError> {
        let entry = self.entry(key)?;
        let clamped = raw_quantity.clamp(0, i64::from(entry.max)) as u32;
        self.quantities.insert(key.to_string(), clamped);
        Ok(())
    }

    /// Returns the quantity for a key, zero for unknown keys.
    pub fn quantity(&self, key: &str) -> u32 {
        self.quantities.get(key).copied().unwrap_or(0)
    }

    /// Returns true iff any quantity is positive.
    ///
    /// Gates completion of the hardware step.
    pub fn has_any_selection(&self) -> bool {
        self.quantities.values().any(|q| *q > 0)
    }

    /// Total hardware cost: Σ quantity × unit price over selected keys.
    pub fn total_cost(&self) -> Money {
        self.entries
            .iter()
            .map(|e| e.unit_price.times(self.quantity(&e.key)))
            .sum()
    }

    /// Returns the current selection map.
    pub fn selection(&self) -> &HardwareSelection {
        &self.quantities
    }

    /// Returns the catalog entries this selector validates against.
    pub fn entries(&self) -> &[HardwareEntry] {
        &self.entries
    }

    fn entry(&self, key: &str) -> Result<&HardwareEntry, DomainError> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| DomainError::unknown_option_key(key))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::domain::foundation::ErrorCode;

    use super::*;

    fn wardrobe_entries() -> Vec<HardwareEntry> {
        vec![
            HardwareEntry::new("hinges", "Hinges", 150, "pair", 12),
            HardwareEntry::new("handles", "Door Handles", 200, "piece", 8),
            HardwareEntry::new("shelf_pins", "Shelf Pins", 50, "set", 10),
        ]
    }

    #[test]
    fn new_starts_with_everything_at_zero() {
        let selector = HardwareSelector::new(&wardrobe_entries());
        assert!(!selector.has_any_selection());
        assert_eq!(selector.total_cost(), Money::ZERO);
    }

    #[test]
    fn set_clamps_into_catalog_bounds() {
        let mut selector = HardwareSelector::new(&wardrobe_entries());
        selector.set("hinges", 99).unwrap();
        assert_eq!(selector.quantity("hinges"), 12);
        selector.set("hinges", -1).unwrap();
        assert_eq!(selector.quantity("hinges"), 0);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut selector = HardwareSelector::new(&wardrobe_entries());
        let err = selector.set("led_strips", 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownOptionKey);
    }

    #[test]
    fn total_cost_sums_quantity_times_unit_price() {
        let mut selector = HardwareSelector::new(&wardrobe_entries());
        selector.set("hinges", 4).unwrap();
        selector.set("handles", 2).unwrap();
        // 4*150 + 2*200 = 1000
        assert_eq!(selector.total_cost(), Money::from_rupees(1000));
    }

    #[test]
    fn with_initial_clamps_seeded_quantities() {
        let prior: HardwareSelection = [("hinges".to_string(), 50)].into_iter().collect();
        let selector = HardwareSelector::with_initial(&wardrobe_entries(), &prior);
        assert_eq!(selector.quantity("hinges"), 12);
        assert_eq!(selector.quantity("handles"), 0);
    }

    proptest! {
        #[test]
        fn total_cost_is_never_negative_and_bounds_hold(
            raws in proptest::collection::vec(any::<i64>(), 1..24)
        ) {
            let entries = wardrobe_entries();
            let mut selector = HardwareSelector::new(&entries);
            let keys: Vec<_> = entries.iter().map(|e| e.key.clone()).collect();
            for (i, raw) in raws.iter().enumerate() {
                selector.set(&keys[i % keys.len()], *raw).unwrap();
            }
            for entry in &entries {
                prop_assert!(selector.quantity(&entry.key) <= entry.max);
            }
            prop_assert!(!selector.total_cost().is_negative());
        }
    }
}
