//! Domain error model.

use thiserror::Error;

use crate::name::ItemName;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Every failure here is recovered locally: the operation is rejected, a
/// status message is produced, and the store is left unchanged. There is no
/// fatal variant because no operation performs IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Input failed validation (blank name after normalization, non-positive
    /// quantity, or a merge that would overflow).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Remove requested for a key absent from the store.
    #[error("item not found: {0}")]
    NotFound(ItemName),

    /// Add requested for a key already present (presence mode only).
    #[error("duplicate item: {0}")]
    Duplicate(ItemName),
}

impl InventoryError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(name: ItemName) -> Self {
        Self::NotFound(name)
    }

    pub fn duplicate(name: ItemName) -> Self {
        Self::Duplicate(name)
    }
}
