//! QuotationSession - one project's quoting session.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::info;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::{
    DomainError, ErrorCode, FurnitureType, ItemId, Money, ProjectId, TaxRate, User,
};
use crate::domain::pricing::PriceCalculator;
use crate::domain::quotation::{FurnitureItem, Quotation, QuotationBuilder};
use crate::domain::workflow::FurnitureWorkflow;
use crate::ports::{IdentityProvider, ProjectStore};

/// Drives one project's quotation from configuration to saved document.
///
/// Owns the active [`FurnitureWorkflow`] and the accumulating
/// [`QuotationBuilder`]; pricing, storage, and identity are injected
/// collaborators. One session per project; sessions are not shared
/// across tasks.
pub struct QuotationSession {
    project_id: ProjectId,
    workflow: FurnitureWorkflow,
    builder: QuotationBuilder,
    tax_rate: TaxRate,
    calculator: Arc<dyn PriceCalculator>,
    store: Arc<dyn ProjectStore>,
    identity: Arc<dyn IdentityProvider>,
}

impl QuotationSession {
    pub fn new(
        project_id: ProjectId,
        furniture_type: FurnitureType,
        catalog: Arc<Catalog>,
        tax_rate: TaxRate,
        calculator: Arc<dyn PriceCalculator>,
        store: Arc<dyn ProjectStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            project_id,
            workflow: FurnitureWorkflow::new(catalog, furniture_type),
            builder: QuotationBuilder::new(),
            tax_rate,
            calculator,
            store,
            identity,
        }
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// The active configuration workflow.
    pub fn workflow(&self) -> &FurnitureWorkflow {
        &self.workflow
    }

    /// Mutable access for step inputs and navigation.
    pub fn workflow_mut(&mut self) -> &mut FurnitureWorkflow {
        &mut self.workflow
    }

    // ───────────────────────────────────────────────────────────────
    // Item lifecycle
    // ───────────────────────────────────────────────────────────────

    /// Finalizes the current configuration and appends it to the quotation.
    ///
    /// On success the workflow is ready for the next item of the same
    /// furniture type. On failure nothing is added and the workflow
    /// keeps its data.
    pub async fn add_current_item(&mut self) -> Result<ItemId, DomainError> {
        let item = self.workflow.finalize(self.calculator.as_ref()).await?;
        let total = item.costs.total();
        let id = self.builder.add_item(item);
        info!(project_id = %self.project_id, item_id = %id, %total, "item added to quotation");
        Ok(id)
    }

    /// As [`Self::add_current_item`], but abandons pricing after `limit`.
    ///
    /// On timeout the in-flight calculation is dropped, its result is
    /// never observed, and the workflow remains busy; the caller decides
    /// whether to retry with a fresh session or surface the failure.
    pub async fn add_current_item_with_timeout(
        &mut self,
        limit: Duration,
    ) -> Result<ItemId, DomainError> {
        match timeout(limit, self.workflow.finalize(self.calculator.as_ref())).await {
            Ok(result) => {
                let item = result?;
                let id = self.builder.add_item(item);
                info!(project_id = %self.project_id, item_id = %id, "item added to quotation");
                Ok(id)
            }
            Err(_) => Err(DomainError::new(
                ErrorCode::PricingError,
                "Price calculation timed out",
            )
            .with_detail("limit_ms", limit.as_millis().to_string())),
        }
    }

    /// Removes the item at `index`, shifting later items down.
    pub fn remove_item(&mut self, index: usize) -> Result<FurnitureItem, DomainError> {
        let removed = self.builder.remove_item(index)?;
        info!(project_id = %self.project_id, index, "item removed from quotation");
        Ok(removed)
    }

    pub fn items(&self) -> &[FurnitureItem] {
        self.builder.items()
    }

    // ───────────────────────────────────────────────────────────────
    // Totals
    // ───────────────────────────────────────────────────────────────

    pub fn subtotal(&self) -> Money {
        self.builder.subtotal()
    }

    pub fn tax(&self) -> Money {
        self.builder.tax(self.tax_rate)
    }

    pub fn grand_total(&self) -> Money {
        self.builder.grand_total(self.tax_rate)
    }

    /// Snapshot of the quotation as it stands right now.
    pub fn quotation(&self) -> Quotation {
        Quotation::build(self.project_id, &self.builder, self.tax_rate)
    }

    // ───────────────────────────────────────────────────────────────
    // Collaborator-backed operations
    // ───────────────────────────────────────────────────────────────

    /// Persists the current furniture list against the project.
    pub async fn save(&self) -> Result<(), DomainError> {
        self.store
            .save_furniture(&self.project_id, self.builder.items())
            .await?;
        info!(project_id = %self.project_id, items = self.builder.len(), "quotation saved");
        Ok(())
    }

    /// Renders the saved quotation document.
    pub async fn render_pdf(&self) -> Result<Vec<u8>, DomainError> {
        self.store.render_pdf(&self.project_id).await
    }

    /// The user this quotation is prepared by.
    pub async fn prepared_by(&self) -> Result<User, DomainError> {
        self.identity.current_user().await
    }
}
