//! Fixture-backed catalog.

use std::path::PathBuf;

use async_trait::async_trait;
use shopcart::{
    fixtures::Fixture,
    products::{Product, ProductId},
};

use crate::domain::catalog::{
    errors::CatalogServiceError,
    models::{ProductPage, ProductQuery},
    service::CatalogService,
};

/// Window size applied when the caller does not name one.
const DEFAULT_PAGE_LIMIT: u32 = 30;

/// Catalog served from a local fixture set, for offline runs and tests.
#[derive(Debug)]
pub struct FixtureCatalogService {
    fixture: Fixture,
}

impl FixtureCatalogService {
    /// Serve an already-loaded fixture.
    #[must_use]
    pub fn new(fixture: Fixture) -> Self {
        Self { fixture }
    }

    /// Load and serve the named set from a fixtures directory.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogServiceError::Fixture`] when the set does not
    /// exist or fails to parse.
    pub fn from_set_in(
        base_path: impl Into<PathBuf>,
        set: &str,
    ) -> Result<Self, CatalogServiceError> {
        Ok(Self::new(Fixture::from_set_in(base_path, set)?))
    }
}

#[async_trait]
impl CatalogService for FixtureCatalogService {
    async fn list_products(
        &self,
        query: ProductQuery,
    ) -> Result<ProductPage, CatalogServiceError> {
        let all = self.fixture.products();
        let skip = query.skip.unwrap_or(0) as usize;
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT) as usize;

        let products: Vec<Product> = all.iter().skip(skip).take(limit).cloned().collect();

        Ok(ProductPage {
            products,
            total: all.len() as u64,
            skip: skip as u64,
            limit: limit as u64,
        })
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogServiceError> {
        self.fixture
            .product(id)
            .cloned()
            .map_err(|_| CatalogServiceError::NotFound(id))
    }
}
