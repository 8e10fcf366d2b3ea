use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for ledger and comparison operations.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Category `{0}` appears more than once in the ledger")]
    DuplicateCategory(String),
    #[error("Item `{1}` appears more than once in category `{0}`")]
    DuplicateItem(String, String),
    #[error("Category catalogs differ between the two ledgers: {0}")]
    CatalogMismatch(String),
}

pub type Result<T> = StdResult<T, EngineError>;
