//! Deterministic budget-constrained furniture recommendation engine.
//!
//! `furnish-core` parses a free-text request into a budget figure and
//! per-category quantity asks, then selects items from an immutable catalog
//! snapshot under that budget with one of three selection policies. All
//! operations are deterministic — identical catalog, budget, and request
//! inputs always produce identical selections, totals, and message trails.

pub mod catalog;
pub mod currency;
pub mod parse;
pub mod recommend;
pub mod selection;
pub mod types;
