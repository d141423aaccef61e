//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product identifier.
pub type ProductId = u64;

/// A product record as served by the catalog.
///
/// Field names follow the catalog's camelCase wire form. Only `id`, `title`
/// and `price` are required; everything else defaults so that trimmed-down
/// fixture records parse too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier, unique across the catalog.
    pub id: ProductId,

    /// Display title.
    pub title: String,

    /// Longer description shown on the product page.
    #[serde(default)]
    pub description: String,

    /// Current selling price per unit.
    pub price: Decimal,

    /// Advertised discount in percent points (0-100), if the product is on
    /// sale. Display metadata; the selling price above is already discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<Decimal>,

    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,

    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,

    /// Average review rating.
    #[serde(default)]
    pub rating: Decimal,

    /// Units in stock.
    #[serde(default)]
    pub stock: u32,

    /// Catalog category slug.
    #[serde(default)]
    pub category: String,

    /// Brand name, absent for unbranded products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}
