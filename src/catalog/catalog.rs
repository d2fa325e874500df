// This is intentionally thin:
// no mutation
// no "restock" methods
// runtime reads only

use thiserror::Error;

use crate::catalog::item::CatalogItem;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Item at row {row} has an invalid price: {price}")]
    InvalidPrice { row: usize, price: f64 },
}

/// The full set of purchasable rows, loaded once per session.
///
/// Row index is item identity: every allocation run works against its own
/// exclusion set of indices, so concurrent runs never share mutable state.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Validates every price (finite, non-negative) and freezes the rows.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        for (row, item) in items.iter().enumerate() {
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    row,
                    price: item.price,
                });
            }
        }
        Ok(Catalog { items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, row: usize) -> Option<&CatalogItem> {
        self.items.get(row)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct category names, ASCII-lowercased, in first-appearance order.
    ///
    /// ASCII case folding matches `contains_category` and the pool's
    /// `eq_ignore_ascii_case` comparisons, so every name returned here is
    /// selectable. The order matters: the parser scans categories in this
    /// order, and the order is a documented tie-break for
    /// number-to-category association.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for item in &self.items {
            let lower = item.category.to_ascii_lowercase();
            if !seen.contains(&lower) {
                seen.push(lower);
            }
        }
        seen
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.category.eq_ignore_ascii_case(name))
    }
}
