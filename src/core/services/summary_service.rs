//! Aggregation helpers reducing a ledger to totals.

use serde::Serialize;

use crate::ledger::{Category, Ledger};

/// Per-category sub-total row, ready for rendering or charting.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub id: String,
    pub name: String,
    pub total: f64,
}

/// Pure aggregation over a ledger snapshot.
///
/// Both functions are total and idempotent; recomputing after every edit is
/// cheap enough that callers never need to memoize.
pub struct SummaryService;

impl SummaryService {
    /// Sum of every entry's amount across the whole ledger. Non-finite
    /// amounts read as zero; an empty ledger sums to zero.
    pub fn grand_total(ledger: &Ledger) -> f64 {
        ledger.categories.iter().map(Category::total).sum()
    }

    /// One sub-total row per category, preserving ledger order. Consumers
    /// pair the two sides' rows by matching `id`.
    pub fn by_category(ledger: &Ledger) -> Vec<CategoryTotal> {
        ledger
            .categories
            .iter()
            .map(|category| CategoryTotal {
                id: category.id.clone(),
                name: category.name.clone(),
                total: category.total(),
            })
            .collect()
    }
}
