//! Fixtures
//!
//! Named demo catalogs loaded from YAML, for offline runs and tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Fixture loading errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// No fixture file exists for the requested set name.
    #[error("Unknown fixture set: {0}")]
    UnknownSet(String),

    /// IO error reading a fixture file.
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Product not found in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

/// On-disk shape of a catalog fixture file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    /// Display name of the set.
    #[serde(default)]
    name: String,

    /// Products in catalog order.
    products: Vec<Product>,
}

/// A named catalog of products, loaded from `{base}/catalog/{set}.yml`.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files.
    base_path: PathBuf,

    /// Display name of the loaded set.
    name: String,

    /// Products in catalog order.
    products: Vec<Product>,
}

impl Fixture {
    /// Create an empty fixture with the default base path.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create an empty fixture with a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            name: String::new(),
            products: Vec::new(),
        }
    }

    /// Load a catalog set from the default base path.
    ///
    /// # Errors
    ///
    /// Returns a `FixtureError` if the set does not exist or cannot be
    /// parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_catalog(name)?;

        Ok(fixture)
    }

    /// Load a catalog set from a custom base path.
    ///
    /// # Errors
    ///
    /// Returns a `FixtureError` if the set does not exist or cannot be
    /// parsed.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture.load_catalog(name)?;

        Ok(fixture)
    }

    /// Build a fixture from products already in memory.
    #[must_use]
    pub fn from_products(name: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            base_path: PathBuf::new(),
            name: name.into(),
            products,
        }
    }

    /// Load products from a catalog YAML fixture file, appending to any
    /// already loaded.
    ///
    /// # Errors
    ///
    /// Returns a `FixtureError` if the file does not exist, cannot be read,
    /// or cannot be parsed.
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("catalog").join(format!("{name}.yml"));

        if !file_path.is_file() {
            return Err(FixtureError::UnknownSet(name.to_string()));
        }

        let contents = fs::read_to_string(&file_path)?;
        let file: CatalogFile = serde_norway::from_str(&contents)?;

        if self.name.is_empty() {
            self.name = if file.name.is_empty() {
                name.to_string()
            } else {
                file.name
            };
        }

        self.products.extend(file.products);

        Ok(self)
    }

    /// Display name of the loaded set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Get a product by its catalog id.
    ///
    /// # Errors
    ///
    /// Returns a `FixtureError::ProductNotFound` if the id is not in the
    /// catalog.
    pub fn product(&self, id: ProductId) -> Result<&Product, FixtureError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or(FixtureError::ProductNotFound(id))
    }

    /// Product lookup keyed by catalog id.
    #[must_use]
    pub fn product_map(&self) -> FxHashMap<ProductId, &Product> {
        self.products
            .iter()
            .map(|product| (product.id, product))
            .collect()
    }

    /// Base path for fixture files.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
