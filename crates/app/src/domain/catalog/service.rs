//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use shopcart::products::{Product, ProductId};

use crate::domain::catalog::{
    errors::CatalogServiceError,
    models::{ProductPage, ProductQuery},
};

/// Configuration for the hosted catalog API.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog base URL, e.g. `https://dummyjson.com`.
    pub base_url: String,
}

/// HTTP client for the hosted catalog API.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    config: CatalogConfig,
    http: Client,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.config.base_url)
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{id}", self.config.base_url)
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn list_products(
        &self,
        query: ProductQuery,
    ) -> Result<ProductPage, CatalogServiceError> {
        let mut request = self.http.get(self.products_url());

        if let Some(limit) = query.limit {
            request = request.query(&[("limit", limit)]);
        }

        if let Some(skip) = query.skip {
            request = request.query(&[("skip", skip)]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CatalogServiceError::UnexpectedResponse(format!(
                "product listing failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogServiceError> {
        let response = self.http.get(self.product_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogServiceError::NotFound(id));
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CatalogServiceError::UnexpectedResponse(format!(
                "product fetch failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }
}

/// Read-only view of the product catalog.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List a window of the catalog in catalog order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogServiceError`] when the catalog cannot be reached
    /// or answers with an unexpected shape.
    async fn list_products(&self, query: ProductQuery)
    -> Result<ProductPage, CatalogServiceError>;

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::NotFound`] for unknown ids, and other
    /// variants when the catalog cannot be reached.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogServiceError>;
}
