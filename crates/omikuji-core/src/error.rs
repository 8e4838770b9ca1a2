//! Error types for the omikuji engine.

use thiserror::Error;

use crate::category::Category;

/// Errors from building a custom advice catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A category's advice list does not have one entry per possible score.
    #[error("category {category} needs exactly {expected} advice entries, got {found}")]
    WrongAdviceCount {
        /// The offending category.
        category: Category,
        /// Required number of entries (one per possible score).
        expected: usize,
        /// Number of entries actually provided.
        found: usize,
    },

    /// The encouragement list is empty.
    #[error("at least one encouragement line is required")]
    NoEncouragements,
}

/// Errors from the durable draw-date store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The state file could not be read or written.
    #[error("state file i/o: {0}")]
    Io(#[from] std::io::Error),

    /// The state file exists but does not hold valid state.
    #[error("state file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
