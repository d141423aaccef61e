//! Carts service errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors from the cart store.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// The backing store failed.
    #[error("storage error")]
    Storage(#[from] StorageError),

    /// The cart document could not be encoded for persistence.
    #[error("failed to encode cart document")]
    Encode(#[from] serde_json::Error),
}
