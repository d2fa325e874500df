pub mod policy;
pub mod pool;

use crate::catalog::Catalog;
use crate::types::{AllocationMetadata, AllocationResult, CategoryRequest, SelectedItem};
pub use policy::{SelectionPolicy, DEFAULT_CATEGORIES};
pub use pool::RemainingPool;

/// Budget-constrained item selection over a read-only catalog snapshot.
///
/// Every acceptance is gated on `running total + price <= budget`, so the
/// total can never exceed the budget, and every row is taken at most once
/// per run regardless of policy.
#[derive(Debug, Default)]
pub struct Allocator;

impl Allocator {
    pub fn new() -> Self {
        Allocator
    }

    pub fn allocate(
        &self,
        catalog: &Catalog,
        budget: f64,
        policy: &SelectionPolicy,
    ) -> AllocationResult {
        let mut run = AllocationRun::new(catalog, budget);

        match policy {
            SelectionPolicy::PrioritizedWithFill { requests } => {
                run.fulfill_requests(requests);
                run.greedy_fill();
                if run.items.is_empty() {
                    run.messages
                        .push("No items were selected within the budget criteria.".to_string());
                }
            }
            SelectionPolicy::DefaultSet { categories } => {
                run.select_default_set(categories);
                if run.items.is_empty() {
                    run.messages
                        .push("Budget is insufficient to buy any furniture.".to_string());
                }
            }
            SelectionPolicy::StrictPerCategory { requests } => {
                run.select_per_category(requests);
            }
        }

        run.finish()
    }
}

/// One allocation run: shared running total, shared remaining pool,
/// append-only message trail.
struct AllocationRun<'a> {
    catalog: &'a Catalog,
    pool: RemainingPool<'a>,
    budget: f64,
    total: f64,
    items: Vec<SelectedItem>,
    messages: Vec<String>,
}

impl<'a> AllocationRun<'a> {
    fn new(catalog: &'a Catalog, budget: f64) -> Self {
        AllocationRun {
            catalog,
            pool: RemainingPool::new(catalog),
            budget,
            total: 0.0,
            items: Vec::new(),
            messages: Vec::new(),
        }
    }

    fn price_of(&self, row: usize) -> f64 {
        self.catalog.items()[row].price
    }

    fn select(&mut self, row: usize) {
        let item = &self.catalog.items()[row];
        self.items.push(SelectedItem {
            row,
            category: item.category.clone(),
            price: item.price,
            attributes: item.attributes.clone(),
        });
        self.total += item.price;
        self.pool.take(row);
        debug_assert!(self.total <= self.budget, "selection pushed total above budget");
    }

    /// Phase 1 of the prioritized policy: per-request fulfillment in the
    /// order requests were produced.
    fn fulfill_requests(&mut self, requests: &[CategoryRequest]) {
        for request in requests {
            if !self.catalog.contains_category(&request.category) {
                self.messages.push(format!(
                    "Warning: desired category '{}' is not available in our inventory.",
                    request.category
                ));
                continue;
            }
            if self.pool.cheapest_in(&request.category).is_none() {
                self.messages.push(format!(
                    "Warning: no items found for desired category '{}' currently in stock.",
                    request.category
                ));
                continue;
            }

            let mut selected = 0u64;
            while selected < request.quantity {
                match self.pool.cheapest_in(&request.category) {
                    Some(row) => {
                        let price = self.price_of(row);
                        if self.total + price <= self.budget {
                            self.select(row);
                            selected += 1;
                        } else {
                            self.messages.push(format!(
                                "Could not afford remaining {} item(s) from category '{}' (cheapest available: {:.2}) within budget. Budget remaining: {:.2}",
                                request.quantity - selected,
                                request.category,
                                price,
                                self.budget - self.total
                            ));
                            break;
                        }
                    }
                    None => {
                        self.messages.push(format!(
                            "Ran out of available items for category '{}' before fulfilling {} items. Selected {}.",
                            request.category, request.quantity, selected
                        ));
                        break;
                    }
                }
            }

            // Never both a success summary and a failure message for one request.
            if selected == request.quantity {
                self.messages.push(format!(
                    "Successfully selected {} items for category '{}'.",
                    request.quantity, request.category
                ));
            } else if selected > 0 {
                self.messages.push(format!(
                    "Selected {} out of {} desired items for category '{}'.",
                    selected, request.quantity, request.category
                ));
            }
        }
    }

    /// Phase 2 of the prioritized policy: ascending-price walk over every
    /// remaining row, stopping permanently at the first unaffordable one.
    fn greedy_fill(&mut self) {
        self.messages
            .push("Attempting to fill remaining budget with other cheapest items.".to_string());

        for row in self.pool.remaining_by_price() {
            let price = self.price_of(row);
            if self.total + price <= self.budget {
                self.select(row);
            } else {
                self.messages.push(format!(
                    "Stopped greedy selection as next item (price: {:.2}) exceeds remaining budget ({:.2}).",
                    price,
                    self.budget - self.total
                ));
                break;
            }
        }
    }

    /// Default policy: the cheapest item of each listed category, in list
    /// order, at most one each, only while affordable.
    fn select_default_set(&mut self, categories: &[String]) {
        for category in categories {
            if let Some(row) = self.pool.cheapest_in(category) {
                if self.total + self.price_of(row) <= self.budget {
                    self.select(row);
                }
            }
        }
    }

    /// Strict policy: up to `quantity` cheapest rows per request, stopping
    /// at the first unaffordable row; leftover budget is never spent on
    /// other categories.
    fn select_per_category(&mut self, requests: &[CategoryRequest]) {
        for request in requests {
            if self.pool.cheapest_in(&request.category).is_none() {
                self.messages.push(format!(
                    "No items available for category '{}'.",
                    request.category
                ));
                continue;
            }

            let mut selected = 0u64;
            while selected < request.quantity {
                let Some(row) = self.pool.cheapest_in(&request.category) else {
                    break;
                };
                if self.total + self.price_of(row) <= self.budget {
                    self.select(row);
                    selected += 1;
                } else {
                    break;
                }
            }

            if selected > 0 {
                self.messages.push(format!(
                    "Selected {} item(s) for category '{}'.",
                    selected, request.category
                ));
            }
        }
    }

    fn finish(self) -> AllocationResult {
        debug_assert!(
            (self.items.iter().map(|i| i.price).sum::<f64>() - self.total).abs() < 1e-9,
            "running total diverged from item price sum"
        );

        let metadata = AllocationMetadata {
            budget: self.budget,
            total_cost: self.total,
            items_considered: self.catalog.len(),
            items_selected: self.items.len(),
            messages: self.messages,
        };

        AllocationResult {
            items: self.items,
            allocation: metadata,
        }
    }
}
