//! Catalog

pub mod errors;
pub mod fixture;
pub mod models;
pub mod service;

pub use errors::CatalogServiceError;
pub use fixture::FixtureCatalogService;
pub use models::{ProductPage, ProductQuery};
pub use service::*;
