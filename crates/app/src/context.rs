//! App Context

use std::sync::Arc;

use rusty_money::iso::{self, Currency};
use shopcart::notify::CartNotifier;
use thiserror::Error;

use crate::{
    config::AppConfig,
    domain::{
        carts::{CartsService, KvCartsService},
        catalog::{
            CatalogConfig, CatalogService, CatalogServiceError, FixtureCatalogService,
            HttpCatalogService,
        },
        contact::{ContactConfig, ContactDelivery, HttpContactService},
    },
    storage::FileStore,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("failed to load catalog fixtures")]
    Fixtures(#[source] CatalogServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub catalog: Arc<dyn CatalogService>,
    pub contact: Arc<dyn ContactDelivery>,
    pub notifier: CartNotifier,
    pub currency: &'static Currency,
}

impl AppContext {
    /// Build the application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the currency code is unknown or, in offline
    /// mode, when the fixture set cannot be loaded.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let currency = iso::find(&config.currency)
            .ok_or_else(|| AppInitError::UnknownCurrency(config.currency.clone()))?;

        let notifier = CartNotifier::new();
        let carts = KvCartsService::new(FileStore::new(&config.data_dir), notifier.clone());

        let catalog: Arc<dyn CatalogService> = if config.offline {
            Arc::new(
                FixtureCatalogService::from_set_in(&config.fixtures_dir, &config.fixture_set)
                    .map_err(AppInitError::Fixtures)?,
            )
        } else {
            Arc::new(HttpCatalogService::new(CatalogConfig {
                base_url: config.catalog_url.clone(),
            }))
        };

        let contact = Arc::new(HttpContactService::new(ContactConfig {
            endpoint: config.contact_url.clone(),
        }));

        Ok(Self {
            carts: Arc::new(carts),
            catalog,
            contact,
            notifier,
            currency,
        })
    }
}
