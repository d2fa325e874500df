use serde::{Deserialize, Serialize};

use crate::catalog::Attributes;

/// A catalog row accepted into the selection.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedItem {
    /// Row index in the catalog snapshot; item identity for uniqueness.
    pub row: usize,
    pub category: String,
    /// Price in the base currency unit.
    pub price: f64,
    /// Passthrough descriptive columns (material, color, ...).
    pub attributes: Attributes,
}

/// Metadata describing the outcome of one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationMetadata {
    pub budget: f64,
    pub total_cost: f64,

    pub items_considered: usize,
    pub items_selected: usize,

    /// Human-readable decision trail, append-only, in chronological order.
    pub messages: Vec<String>,
}

/// The final result of an allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Selection order is purchase order.
    pub items: Vec<SelectedItem>,
    pub allocation: AllocationMetadata,
}

impl AllocationResult {
    pub fn total_cost(&self) -> f64 {
        self.allocation.total_cost
    }

    pub fn remaining_budget(&self) -> f64 {
        self.allocation.budget - self.allocation.total_cost
    }

    pub fn messages(&self) -> &[String] {
        &self.allocation.messages
    }
}
