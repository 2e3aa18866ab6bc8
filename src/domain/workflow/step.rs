//! ConfigStep enum representing the 4 configuration steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The 4 configuration steps, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigStep {
    Dimensions,
    Components,
    Materials,
    Hardware,
}

impl ConfigStep {
    /// Returns all steps in canonical order.
    pub fn all() -> &'static [ConfigStep] {
        &[
            ConfigStep::Dimensions,
            ConfigStep::Components,
            ConfigStep::Materials,
            ConfigStep::Hardware,
        ]
    }

    /// Returns the first step.
    pub fn first() -> ConfigStep {
        ConfigStep::Dimensions
    }

    /// Returns the 0-based index of this step in the canonical order.
    pub fn order_index(&self) -> usize {
        Self::all()
            .iter()
            .position(|s| s == self)
            .expect("ConfigStep must be in all() array")
    }

    /// Returns the next step in order, if any.
    pub fn next(&self) -> Option<ConfigStep> {
        Self::all().get(self.order_index() + 1).copied()
    }

    /// Returns the previous step in order, if any.
    pub fn previous(&self) -> Option<ConfigStep> {
        let idx = self.order_index();
        if idx == 0 {
            None
        } else {
            Self::all().get(idx - 1).copied()
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ConfigStep::Dimensions => "Dimensions",
            ConfigStep::Components => "Components",
            ConfigStep::Materials => "Materials",
            ConfigStep::Hardware => "Hardware",
        }
    }
}

impl StateMachine for ConfigStep {
    /// The wizard moves one step forward or one step back, never skips.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target) || self.previous() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.previous().into_iter().chain(self.next()).collect()
    }
}

impl fmt::Display for ConfigStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
