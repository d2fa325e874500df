use crate::catalog::Catalog;
use crate::parse::RequestParser;
use crate::selection::{Allocator, SelectionPolicy};
use crate::types::{AllocationResult, ParseError, SelectedItem};

/// Thin orchestrator: Parser -> Allocator over one catalog snapshot.
pub struct Recommender {
    catalog: Catalog,
    parser: RequestParser,
    allocator: Allocator,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Self {
        let parser = RequestParser::new(&catalog.categories());
        Recommender {
            catalog,
            parser,
            allocator: Allocator::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Parse the request text and allocate with the standard policy:
    /// strict per-category selection when the text asked for specific
    /// furniture, the default category set otherwise.
    pub fn recommend(&self, text: &str) -> Result<AllocationResult, ParseError> {
        let parsed = self.parser.parse(text)?;
        let policy = SelectionPolicy::for_requests(parsed.requests);
        Ok(self
            .allocator
            .allocate(&self.catalog, parsed.budget as f64, &policy))
    }

    /// Parse the request text and allocate with the prioritized policy,
    /// which spends leftover budget on the cheapest remaining items of any
    /// category after the explicit asks are fulfilled.
    pub fn recommend_prioritized(&self, text: &str) -> Result<AllocationResult, ParseError> {
        let parsed = self.parser.parse(text)?;
        let policy = SelectionPolicy::PrioritizedWithFill {
            requests: parsed.requests,
        };
        Ok(self
            .allocator
            .allocate(&self.catalog, parsed.budget as f64, &policy))
    }

    /// Up to `limit` cheapest catalog rows priced within a leftover budget,
    /// ascending price, row index breaking ties. Pure read: nothing is
    /// consumed, so this can follow any allocation without affecting it.
    pub fn suggest_within(&self, remaining_budget: f64, limit: usize) -> Vec<SelectedItem> {
        let items = self.catalog.items();
        let mut rows: Vec<usize> = (0..items.len())
            .filter(|&row| items[row].price <= remaining_budget)
            .collect();
        rows.sort_by(|&a, &b| {
            items[a]
                .price
                .partial_cmp(&items[b].price)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });
        rows.truncate(limit);

        rows.into_iter()
            .map(|row| SelectedItem {
                row,
                category: items[row].category.clone(),
                price: items[row].price,
                attributes: items[row].attributes.clone(),
            })
            .collect()
    }
}
