use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One explicit user ask: "give me `quantity` items of `category`".
///
/// Produced by the parser per category mention (repeated mentions of the
/// same category yield separate entries) and consumed once by the
/// allocator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub category: String,
    /// Positive; defaults to 1 when no number was associated with the mention.
    pub quantity: u64,
}

impl CategoryRequest {
    pub fn new(category: impl Into<String>, quantity: u64) -> Self {
        Self {
            category: category.into(),
            quantity,
        }
    }
}

/// Successful parse of a free-text request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRequest {
    /// Budget in the base currency unit, taken from the largest numeric
    /// token in the text.
    pub budget: u64,
    /// Explicit category asks in mention order. Empty is a valid outcome:
    /// the text named a budget but no known category.
    pub requests: Vec<CategoryRequest>,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No budget figure found in the request text")]
    NoBudgetFound,
}
