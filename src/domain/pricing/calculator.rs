//! PriceCalculator - the injectable pricing strategy.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

use super::{CostBreakdown, ItemConfig};

/// Strategy for turning a complete configuration into a cost breakdown.
///
/// This is the one genuinely swappable policy in the engine. It is async
/// only to accommodate a remote pricing collaborator; implementations
/// must be pure over their input and leave no partial state behind on
/// failure.
///
/// # Contract
///
/// - `CostBreakdown::total` is always the exact sum of its parts (enforced
///   by construction).
/// - Failures surface as `PricingError`; the caller's workflow state is
///   not the implementation's concern.
#[async_trait]
pub trait PriceCalculator: Send + Sync {
    /// Prices a fully-configured furniture item.
    async fn calculate(&self, config: &ItemConfig) -> Result<CostBreakdown, DomainError>;
}
