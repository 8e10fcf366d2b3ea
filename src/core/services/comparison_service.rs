//! End-to-end comparison of the two sides' ledgers.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::commentary::{self, Verdict};
use crate::core::services::summary_service::SummaryService;
use crate::errors::{EngineError, Result};
use crate::ledger::Ledger;

/// Paired sub-totals for one category across both sides.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryComparison {
    pub id: String,
    pub name: String,
    pub bride_price: f64,
    pub dowry: f64,
}

/// Everything the result view renders: grand totals, paired per-category
/// rows, and the commentary verdict.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonReport {
    pub bride_price_total: f64,
    pub dowry_total: f64,
    /// Positive when the bride-price side is larger.
    pub diff: f64,
    pub per_category: Vec<CategoryComparison>,
    pub verdict: Verdict,
}

/// Builds comparison reports from the two ledgers.
///
/// The sides must share the category catalog; rows are paired by category
/// id and a structural mismatch is reported instead of guessed around.
pub struct ComparisonService;

impl ComparisonService {
    pub fn compare(bride_price: &Ledger, dowry: &Ledger) -> Result<ComparisonReport> {
        Self::compare_with(bride_price, dowry, &mut rand::thread_rng())
    }

    /// As [`ComparisonService::compare`], drawing the commentary pick from
    /// the supplied randomness source.
    pub fn compare_with<R: Rng>(
        bride_price: &Ledger,
        dowry: &Ledger,
        rng: &mut R,
    ) -> Result<ComparisonReport> {
        let left = SummaryService::by_category(bride_price);
        let right = SummaryService::by_category(dowry);
        if left.len() != right.len() {
            return Err(EngineError::CatalogMismatch(format!(
                "{} categories on the bride-price side, {} on the dowry side",
                left.len(),
                right.len()
            )));
        }

        let mut per_category = Vec::with_capacity(left.len());
        for row in &left {
            let paired = right.iter().find(|other| other.id == row.id).ok_or_else(|| {
                EngineError::CatalogMismatch(format!(
                    "category `{}` missing on the dowry side",
                    row.id
                ))
            })?;
            per_category.push(CategoryComparison {
                id: row.id.clone(),
                name: row.name.clone(),
                bride_price: row.total,
                dowry: paired.total,
            });
        }

        let bride_price_total = SummaryService::grand_total(bride_price);
        let dowry_total = SummaryService::grand_total(dowry);
        debug!(
            "comparing totals {:.2} vs {:.2} across {} categories",
            bride_price_total,
            dowry_total,
            per_category.len()
        );
        let verdict = commentary::classify_with(bride_price_total, dowry_total, rng);

        Ok(ComparisonReport {
            bride_price_total,
            dowry_total,
            diff: bride_price_total - dowry_total,
            per_category,
            verdict,
        })
    }
}
