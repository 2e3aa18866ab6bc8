//! QuotationBuilder - ordered aggregation of finalized furniture items.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{DomainError, ItemId, Money, ProjectId, TaxRate, Timestamp};

use super::FurnitureItem;

/// How long a generated quotation remains valid, in days.
const VALIDITY_DAYS: i64 = 30;

/// Collects finalized furniture items for one project.
///
/// Totals are pure reductions over the current list, recomputed on every
/// call; the aggregator can never present a stale figure. One builder per
/// active editing session, owned exclusively by its caller.
#[derive(Debug, Clone, Default)]
pub struct QuotationBuilder {
    items: Vec<FurnitureItem>,
}

impl QuotationBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item, assigning a locally-unique id if it has none.
    pub fn add_item(&mut self, mut item: FurnitureItem) -> ItemId {
        let id = *item.id.get_or_insert_with(ItemId::new);
        debug!(%id, furniture_type = %item.furniture_type, total = %item.costs.total(), "item added to quotation");
        self.items.push(item);
        id
    }

    /// Removes an item by position, preserving the order of the rest.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the position is invalid.
    pub fn remove_item(&mut self, index: usize) -> Result<FurnitureItem, DomainError> {
        if index >= self.items.len() {
            return Err(DomainError::index_out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[FurnitureItem] {
        &self.items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items have been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every item's total.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.costs.total()).sum()
    }

    /// Tax on the current subtotal.
    pub fn tax(&self, rate: TaxRate) -> Money {
        rate.apply(self.subtotal())
    }

    /// Subtotal plus tax.
    pub fn grand_total(&self, rate: TaxRate) -> Money {
        let subtotal = self.subtotal();
        subtotal + rate.apply(subtotal)
    }
}

/// A derived quotation snapshot for one project, handed to the rendering
/// collaborator. Never stored by the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub project_id: ProjectId,
    pub items: Vec<FurnitureItem>,
    pub subtotal: Money,
    pub tax: Money,
    pub grand_total: Money,
    pub generated_at: Timestamp,
    pub valid_until: Timestamp,
}

impl Quotation {
    /// Snapshots the builder's current state at the given tax rate.
    pub fn build(project_id: ProjectId, builder: &QuotationBuilder, rate: TaxRate) -> Self {
        let generated_at = Timestamp::now();
        Self {
            project_id,
            items: builder.items().to_vec(),
            subtotal: builder.subtotal(),
            tax: builder.tax(rate),
            grand_total: builder.grand_total(rate),
            generated_at,
            valid_until: generated_at.add_days(VALIDITY_DAYS),
        }
    }
}
