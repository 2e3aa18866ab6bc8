//! FurnitureWorkflow - the ordered, gated configuration wizard.

use std::sync::Arc;

use tracing::debug;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::{DomainError, ErrorCode, FurnitureType};
use crate::domain::pricing::{ItemConfig, PriceCalculator};
use crate::domain::quotation::FurnitureItem;
use crate::domain::selection::{
    ComponentSelector, DimensionField, DimensionsForm, HardwareSelector, MaterialField,
    MaterialSelector,
};

use super::ConfigStep;

/// Observable state of a workflow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// Collecting input for the given step.
    Collecting(ConfigStep),
    /// A finalization call to the pricing collaborator is outstanding;
    /// no new input is accepted.
    Calculating,
}

/// The configuration wizard for one furniture item.
///
/// Sequences dimension entry, component, material and hardware selection
/// into a strictly linear, step-gated workflow. The terminal action prices
/// the configuration and emits a [`FurnitureItem`], then resets for the
/// next item.
///
/// All input flows through this type so the busy guard can reject
/// mutation while a pricing call is outstanding. One instance serves one
/// editing session; there is no cross-instance sharing.
pub struct FurnitureWorkflow {
    catalog: Arc<Catalog>,
    furniture_type: FurnitureType,
    state: WorkflowState,
    dimensions: DimensionsForm,
    components: ComponentSelector,
    materials: MaterialSelector,
    hardware: HardwareSelector,
}

impl FurnitureWorkflow {
    /// Creates a workflow against an injected catalog.
    pub fn new(catalog: Arc<Catalog>, furniture_type: FurnitureType) -> Self {
        let components = ComponentSelector::new(catalog.components_for(furniture_type));
        let hardware = HardwareSelector::new(catalog.hardware_for(furniture_type));
        let materials = MaterialSelector::new(catalog.materials().clone());
        Self {
            catalog,
            furniture_type,
            state: WorkflowState::Collecting(ConfigStep::first()),
            dimensions: DimensionsForm::default(),
            components,
            materials,
            hardware,
        }
    }

    /// Creates a workflow against the built-in standard catalog.
    pub fn with_standard_catalog(furniture_type: FurnitureType) -> Self {
        Self::new(Arc::new(Catalog::standard().clone()), furniture_type)
    }

    // ───────────────────────────────────────────────────────────────
    // Observation
    // ───────────────────────────────────────────────────────────────

    /// Returns the current workflow state.
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Returns the active step, or `None` while calculating.
    pub fn current_step(&self) -> Option<ConfigStep> {
        match self.state {
            WorkflowState::Collecting(step) => Some(step),
            WorkflowState::Calculating => None,
        }
    }

    /// Returns the active furniture type.
    pub fn furniture_type(&self) -> FurnitureType {
        self.furniture_type
    }

    /// Returns the dimension form as currently entered.
    pub fn dimensions(&self) -> &DimensionsForm {
        &self.dimensions
    }

    /// Returns the component selector for inspection.
    pub fn components(&self) -> &ComponentSelector {
        &self.components
    }

    /// Returns the material selector for inspection.
    pub fn materials(&self) -> &MaterialSelector {
        &self.materials
    }

    /// Returns the hardware selector for inspection.
    pub fn hardware(&self) -> &HardwareSelector {
        &self.hardware
    }

    /// Returns true if a step's completion predicate holds.
    pub fn is_step_complete(&self, step: ConfigStep) -> bool {
        match step {
            ConfigStep::Dimensions => self.dimensions.is_valid(),
            ConfigStep::Components => self.components.has_any_selection(),
            ConfigStep::Materials => self.materials.is_complete(),
            ConfigStep::Hardware => self.hardware.has_any_selection(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Input
    // ───────────────────────────────────────────────────────────────

    /// Changes the furniture type.
    ///
    /// Permitted only while on the `Dimensions` step; the type freezes
    /// once dimension entry is complete. An actual change invalidates the
    /// component, material and hardware selections, since their keys were
    /// validated against the previous type's catalog.
    pub fn set_furniture_type(&mut self, furniture_type: FurnitureType) -> Result<(), DomainError> {
        if self.state != WorkflowState::Collecting(ConfigStep::Dimensions) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Furniture type can only change during dimension entry",
            ));
        }
        if furniture_type != self.furniture_type {
            debug!(from = %self.furniture_type, to = %furniture_type, "furniture type changed, resetting selections");
            self.furniture_type = furniture_type;
            self.reset_selections();
        }
        Ok(())
    }

    /// Sets one raw dimension field.
    pub fn set_dimension_field(
        &mut self,
        field: DimensionField,
        raw: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.ensure_not_busy()?;
        self.dimensions.set(field, raw);
        Ok(())
    }

    /// Sets a component quantity, clamped to the catalog maximum.
    pub fn set_component(&mut self, key: &str, raw_quantity: i64) -> Result<(), DomainError> {
        self.ensure_not_busy()?;
        self.components.set(key, raw_quantity)
    }

    /// Switches a toggle component on or off.
    pub fn toggle_component(&mut self, key: &str, on: bool) -> Result<(), DomainError> {
        self.ensure_not_busy()?;
        self.components.toggle(key, on)
    }

    /// Sets a material field.
    pub fn set_material(&mut self, field: MaterialField, value: &str) -> Result<(), DomainError> {
        self.ensure_not_busy()?;
        self.materials.set(field, value);
        Ok(())
    }

    /// Sets a hardware quantity, clamped to the catalog maximum.
    pub fn set_hardware(&mut self, key: &str, raw_quantity: i64) -> Result<(), DomainError> {
        self.ensure_not_busy()?;
        self.hardware.set(key, raw_quantity)
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Moves to the next step if the current step's gate holds.
    ///
    /// A failed gate is a no-op, not an error. Returns whether the state
    /// changed. `Hardware` has no next step; finalization is a separate
    /// action ([`FurnitureWorkflow::finalize`]).
    pub fn advance(&mut self) -> bool {
        let WorkflowState::Collecting(step) = self.state else {
            return false;
        };
        if !self.is_step_complete(step) {
            return false;
        }
        match step.next() {
            Some(next) => {
                debug!(from = %step, to = %next, "workflow advanced");
                self.state = WorkflowState::Collecting(next);
                true
            }
            None => false,
        }
    }

    /// Moves to the previous step, preserving entered data.
    ///
    /// A no-op from the initial step. Returns whether the state changed.
    pub fn retreat(&mut self) -> bool {
        let WorkflowState::Collecting(step) = self.state else {
            return false;
        };
        match step.previous() {
            Some(prev) => {
                self.state = WorkflowState::Collecting(prev);
                true
            }
            None => false,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Finalization
    // ───────────────────────────────────────────────────────────────

    /// Terminal action: prices the configuration and emits the item.
    ///
    /// Only valid from the `Hardware` step with every gate satisfied. The
    /// workflow enters `Calculating` for the duration of the pricing call
    /// and rejects concurrent finalization with `WorkflowBusy`. On success
    /// the workflow resets to a fresh `Dimensions` step (furniture type
    /// retained); on failure the error propagates unchanged and the
    /// `Hardware` step is restored with all data intact.
    pub async fn finalize(
        &mut self,
        calculator: &dyn PriceCalculator,
    ) -> Result<FurnitureItem, DomainError> {
        match self.state {
            WorkflowState::Calculating => {
                return Err(DomainError::new(
                    ErrorCode::WorkflowBusy,
                    "A finalization is already outstanding",
                ));
            }
            WorkflowState::Collecting(ConfigStep::Hardware) => {}
            WorkflowState::Collecting(step) => {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    format!("Cannot finalize from the {} step", step),
                ));
            }
        }

        let config = self.assemble_config()?;
        self.state = WorkflowState::Calculating;

        match calculator.calculate(&config).await {
            Ok(costs) => {
                debug!(furniture_type = %config.furniture_type, total = %costs.total(), "item finalized");
                let item = FurnitureItem::from_config(config, costs);
                self.reset_for_next_item();
                Ok(item)
            }
            Err(err) => {
                // All-or-nothing: no partial item, data intact.
                self.state = WorkflowState::Collecting(ConfigStep::Hardware);
                Err(err)
            }
        }
    }

    fn assemble_config(&self) -> Result<ItemConfig, DomainError> {
        let dimensions = self
            .dimensions
            .validate()
            .map_err(|_| DomainError::incomplete_configuration("dimensions"))?;
        if !self.components.has_any_selection() {
            return Err(DomainError::incomplete_configuration("components"));
        }
        let materials = self
            .materials
            .choice()
            .ok_or_else(|| DomainError::incomplete_configuration("materials.primary"))?;
        if !self.hardware.has_any_selection() {
            return Err(DomainError::incomplete_configuration("hardware"));
        }
        Ok(ItemConfig {
            furniture_type: self.furniture_type,
            dimensions,
            components: self.components.selection().clone(),
            materials,
            hardware: self.hardware.selection().clone(),
        })
    }

    fn reset_selections(&mut self) {
        self.components = ComponentSelector::new(self.catalog.components_for(self.furniture_type));
        self.hardware = HardwareSelector::new(self.catalog.hardware_for(self.furniture_type));
        self.materials = MaterialSelector::new(self.catalog.materials().clone());
    }

    fn reset_for_next_item(&mut self) {
        self.dimensions = DimensionsForm::default();
        self.reset_selections();
        self.state = WorkflowState::Collecting(ConfigStep::first());
    }

    fn ensure_not_busy(&self) -> Result<(), DomainError> {
        if self.state == WorkflowState::Calculating {
            return Err(DomainError::new(
                ErrorCode::WorkflowBusy,
                "No input is accepted while a finalization is outstanding",
            ));
        }
        Ok(())
    }
}
