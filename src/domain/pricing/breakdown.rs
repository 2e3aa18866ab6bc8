//! CostBreakdown value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

/// The material/hardware/labor/total decomposition of one item's price.
///
/// The total is computed by the constructor, so the sum invariant cannot
/// be broken by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    material_cost: Money,
    hardware_cost: Money,
    labor_cost: Money,
    total: Money,
}

impl CostBreakdown {
    /// Creates a breakdown; the total is always the exact sum of the parts.
    pub fn new(material_cost: Money, hardware_cost: Money, labor_cost: Money) -> Self {
        Self {
            material_cost,
            hardware_cost,
            labor_cost,
            total: material_cost + hardware_cost + labor_cost,
        }
    }

    pub fn material_cost(&self) -> Money {
        self.material_cost
    }

    pub fn hardware_cost(&self) -> Money {
        self.hardware_cost
    }

    pub fn labor_cost(&self) -> Money {
        self.labor_cost
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_the_sum_of_the_parts() {
        let costs = CostBreakdown::new(
            Money::from_rupees(15000),
            Money::from_rupees(5000),
            Money::from_rupees(8000),
        );
        assert_eq!(costs.total(), Money::from_rupees(28000));
    }

    #[test]
    fn zero_parts_give_zero_total() {
        let costs = CostBreakdown::new(Money::ZERO, Money::ZERO, Money::ZERO);
        assert_eq!(costs.total(), Money::ZERO);
    }

    #[test]
    fn serializes_all_four_figures() {
        let costs = CostBreakdown::new(
            Money::from_rupees(100),
            Money::from_rupees(200),
            Money::from_rupees(300),
        );
        let json = serde_json::to_value(costs).unwrap();
        assert_eq!(json["material_cost"], 100);
        assert_eq!(json["hardware_cost"], 200);
        assert_eq!(json["labor_cost"], 300);
        assert_eq!(json["total"], 600);
    }

    #[test]
    fn deserialized_breakdown_keeps_its_figures() {
        let costs = CostBreakdown::new(
            Money::from_rupees(1),
            Money::from_rupees(2),
            Money::from_rupees(3),
        );
        let json = serde_json::to_string(&costs).unwrap();
        let back: CostBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back, costs);
    }
}
