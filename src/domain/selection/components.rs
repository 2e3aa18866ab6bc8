//! Component selector - counted and toggled options for one furniture type.

use std::collections::BTreeMap;

use crate::domain::catalog::ComponentEntry;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Map from component key to selected quantity.
pub type ComponentSelection = BTreeMap<String, u32>;

/// Holds the component quantities chosen for the active furniture type.
///
/// Every mutation re-applies the catalog clamp; a quantity can never
/// exceed its entry's maximum, not even via seeded initial data.
#[derive(Debug, Clone)]
pub struct ComponentSelector {
    entries: Vec<ComponentEntry>,
    quantities: ComponentSelection,
}

impl ComponentSelector {
    /// Creates a selector initialized from catalog defaults.
    pub fn new(entries: &[ComponentEntry]) -> Self {
        let quantities = entries
            .iter()
            .map(|e| (e.key.clone(), e.default_quantity()))
            .collect();
        Self {
            entries: entries.to_vec(),
            quantities,
        }
    }

    /// Creates a selector seeded from a prior selection.
    ///
    /// Known keys take the prior quantity, clamped to the catalog maximum;
    /// keys absent from the prior state fall back to catalog defaults.
    /// Prior keys unknown to the catalog are dropped.
    pub fn with_initial(entries: &[ComponentEntry], prior: &ComponentSelection) -> Self {
        let quantities = entries
            .iter()
            .map(|e| {
                let qty = prior
                    .get(&e.key)
                    .map(|q| (*q).min(e.max()))
                    .unwrap_or_else(|| e.default_quantity());
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
        let clamped = raw_quantity.clamp(0, i64::from(entry.max())) as u32;
        self.quantities.insert(key.to_string(), clamped);
        Ok(())
    }

    /// Switches a toggle-kind entry on or off.
    ///
    /// # Errors
    ///
    /// `UnknownOptionKey` for keys outside the catalog; `ValidationFailed`
    /// for counter-kind entries.
    pub fn toggle(&mut self, key: &str, on: bool) -> Result<(), DomainError> {
        let entry = self.entry(key)?;
        if !entry.is_toggle() {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Component '{}' is not a toggle", key),
            )
            .with_detail("key", key));
        }
        self.quantities.insert(key.to_string(), u32::from(on));
        Ok(())
    }

    /// Returns the quantity for a key, zero for unknown keys.
    pub fn quantity(&self, key: &str) -> u32 {
        self.quantities.get(key).copied().unwrap_or(0)
    }

    /// Returns true iff any quantity is positive.
    ///
    /// Gates completion of the components step.
    pub fn has_any_selection(&self) -> bool {
        self.quantities.values().any(|q| *q > 0)
    }

    /// Returns the current selection map.
    pub fn selection(&self) -> &ComponentSelection {
        &self.quantities
    }

    /// Returns the catalog entries this selector validates against.
    pub fn entries(&self) -> &[ComponentEntry] {
        &self.entries
    }

    fn entry(&self, key: &str) -> Result<&ComponentEntry, DomainError> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| DomainError::unknown_option_key(key))
    }
}
