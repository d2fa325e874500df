use serde::{Deserialize, Serialize};

use crate::types::CategoryRequest;

/// Categories considered when the request text named no furniture at all.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["table", "sofa", "chair", "desk", "bed"];

/// Selectable allocation strategy.
///
/// All three policies run on the same engine (shared running total, shared
/// remaining pool, same budget gate); they differ only in which rows they
/// consider and in what they do with leftover budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Fulfill explicit requests in order, then spend leftover budget on the
    /// cheapest remaining rows of any category.
    PrioritizedWithFill { requests: Vec<CategoryRequest> },
    /// At most one item per listed category, in list order, cheapest first.
    /// No fill.
    DefaultSet { categories: Vec<String> },
    /// Fulfill explicit requests in order; leftover budget outside the
    /// requested categories is deliberately left unspent.
    StrictPerCategory { requests: Vec<CategoryRequest> },
}

impl SelectionPolicy {
    /// The fixed default set used when nothing specific was requested.
    pub fn default_set() -> Self {
        SelectionPolicy::DefaultSet {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Policy the orchestrator applies to a parsed request list: explicit
    /// asks get strict per-category selection, an empty list falls back to
    /// the default set.
    pub fn for_requests(requests: Vec<CategoryRequest>) -> Self {
        if requests.is_empty() {
            Self::default_set()
        } else {
            SelectionPolicy::StrictPerCategory { requests }
        }
    }
}
