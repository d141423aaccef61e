//! Catalog service errors.

use shopcart::{fixtures::FixtureError, products::ProductId};
use thiserror::Error;

/// Errors from the product catalog.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// No product exists with the requested id.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with something other than the expected shape.
    #[error("unexpected response from catalog: {0}")]
    UnexpectedResponse(String),

    /// A local fixture set could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),
}
