//! Catalog models.

use serde::Deserialize;
use shopcart::products::Product;

/// One page of the product listing, in the envelope the catalog API uses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPage {
    /// Products in this window, in catalog order.
    pub products: Vec<Product>,

    /// Total number of products in the catalog.
    pub total: u64,

    /// Offset this window starts at.
    pub skip: u64,

    /// Window size that was applied.
    pub limit: u64,
}

/// Listing window handed to the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductQuery {
    /// Maximum number of products to return; the catalog's own default
    /// applies when omitted.
    pub limit: Option<u32>,

    /// Number of products to skip from the top of the catalog.
    pub skip: Option<u32>,
}
