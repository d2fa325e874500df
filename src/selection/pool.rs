use crate::catalog::Catalog;

/// Index-exclusion view over an immutable catalog.
///
/// The allocator never mutates catalog rows; it marks row indices as taken
/// here. Each allocation run owns its own pool, so concurrent runs over the
/// same catalog snapshot cannot interfere.
#[derive(Debug)]
pub struct RemainingPool<'a> {
    catalog: &'a Catalog,
    taken: Vec<bool>,
}

impl<'a> RemainingPool<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        RemainingPool {
            catalog,
            taken: vec![false; catalog.len()],
        }
    }

    /// Cheapest not-yet-taken row of a category, ties broken by ascending
    /// row index. Category comparison is case-insensitive.
    pub fn cheapest_in(&self, category: &str) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (row, item) in self.catalog.items().iter().enumerate() {
            if self.taken[row] || !item.category.eq_ignore_ascii_case(category) {
                continue;
            }
            match best {
                // <= keeps the earlier row on equal prices.
                Some(b) if self.catalog.items()[b].price <= item.price => {}
                _ => best = Some(row),
            }
        }
        best
    }

    /// All not-yet-taken rows in ascending price order, ties broken by
    /// ascending row index.
    pub fn remaining_by_price(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = (0..self.taken.len()).filter(|&r| !self.taken[r]).collect();
        rows.sort_by(|&a, &b| {
            let items = self.catalog.items();
            items[a]
                .price
                .partial_cmp(&items[b].price)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });
        rows
    }

    pub fn take(&mut self, row: usize) {
        debug_assert!(!self.taken[row], "row {row} taken twice");
        self.taken[row] = true;
    }

    pub fn is_taken(&self, row: usize) -> bool {
        self.taken[row]
    }
}
