use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, Result};
use crate::ledger::catalog;
use crate::ledger::category::Category;

/// One side's full itemized record, organized into the fixed categories.
///
/// The bride-price and dowry sides each hold their own independent value;
/// the two are never merged and share no data. Edits go through
/// [`crate::core::services::EditorService`], which returns a new value and
/// leaves prior snapshots intact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    pub categories: Vec<Category>,
}

impl Default for Ledger {
    /// Seeds every catalog category with an empty item list.
    fn default() -> Self {
        Self {
            categories: catalog::seed_categories(),
        }
    }
}

impl Ledger {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|category| category.id == id)
    }

    /// Total number of entries across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|category| category.items.len()).sum()
    }

    /// Checks the uniqueness rules: category ids unique within the ledger,
    /// item ids unique within their owning category.
    pub fn validate(&self) -> Result<()> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(EngineError::DuplicateCategory(category.id.clone()));
            }
            let mut item_ids = HashSet::new();
            for item in &category.items {
                if !item_ids.insert(item.id.as_str()) {
                    return Err(EngineError::DuplicateItem(
                        category.id.clone(),
                        item.id.clone(),
                    ));
                }
            }
        }
        Ok(())
    }
}
