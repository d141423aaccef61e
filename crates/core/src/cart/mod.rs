//! Cart

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Errors related to cart document construction.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Two line items share a product id (index, id).
    #[error("line item {0} duplicates product id {1}")]
    DuplicateId(usize, ProductId),
}

/// One product's presence in the cart.
///
/// Display metadata and the unit price are copied from the catalog record at
/// add-time and never re-fetched; `total_price` is recomputed on every
/// quantity change so it cannot drift from `unit_price × quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog product identifier, unique within the cart.
    pub id: ProductId,

    /// Product title at add-time.
    pub title: String,

    /// Thumbnail URL at add-time.
    pub thumbnail: String,

    /// Price per unit, fixed at add-time.
    pub unit_price: Decimal,

    /// Number of units, always at least 1.
    pub quantity: u32,

    /// `unit_price × quantity`.
    pub total_price: Decimal,

    /// Advertised discount in percent points (0-100) at add-time. Used only
    /// to display savings; `unit_price` is already the discounted price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<Decimal>,

    /// When the product first entered the cart. Informational only.
    pub added_at: Timestamp,
}

impl LineItem {
    /// Capture a product into the cart at the given quantity.
    #[must_use]
    pub fn new(product: &Product, quantity: u32) -> Self {
        LineItem {
            id: product.id,
            title: product.title.clone(),
            thumbnail: product.thumbnail.clone(),
            unit_price: product.price,
            quantity,
            total_price: product.price * Decimal::from(quantity),
            discount_percentage: product.discount_percentage,
            added_at: Timestamp::now(),
        }
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.total_price = self.unit_price * Decimal::from(quantity);
    }
}

/// The cart document: an ordered sequence of line items, read and written as
/// a whole.
///
/// Every mutation returns whether the document changed, so a persistence
/// layer can skip the rewrite (and the change broadcast) when nothing moved.
/// Serializes as a bare JSON array of line items.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Create a cart from existing line items.
    ///
    /// # Errors
    ///
    /// Returns a `CartError::DuplicateId` if two items share a product id.
    pub fn with_items(items: impl Into<Vec<LineItem>>) -> Result<Self, CartError> {
        let items = items.into();

        items.iter().enumerate().try_for_each(|(i, item)| {
            let first = items.iter().position(|other| other.id == item.id);

            match first {
                Some(j) if j < i => Err(CartError::DuplicateId(i, item.id)),
                _ => Ok(()),
            }
        })?;

        Ok(Cart { items })
    }

    /// Add a product to the cart.
    ///
    /// If the product is already present its quantity increases by
    /// `quantity` (merge policy) and its total is recomputed; the metadata
    /// captured at first add stays untouched. Otherwise a new line item is
    /// appended. Callers clamp `quantity` to at least 1; the cart does not
    /// defend against 0.
    ///
    /// Always a change; returns `true`.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) => {
                item.set_quantity(item.quantity + quantity);
            }
            None => {
                self.items.push(LineItem::new(product, quantity));
            }
        }

        true
    }

    /// Remove the line item with the given product id.
    ///
    /// Returns `false` without error when the id is not in the cart.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let before = self.items.len();

        self.items.retain(|item| item.id != id);

        self.items.len() != before
    }

    /// Replace the quantity of the line item with the given product id.
    ///
    /// Rejected (no change) when `quantity` is less than 1, when the id is
    /// not in the cart, or when the quantity already has that value.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }

        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.quantity != quantity => {
                item.set_quantity(quantity);
                true
            }
            _ => false,
        }
    }

    /// Remove every line item.
    ///
    /// Returns `false` when the cart was already empty.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }

        self.items.clear();

        true
    }

    /// The line items in insertion order. Callers cannot mutate cart state
    /// through this view.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up the line item for a product id.
    #[must_use]
    pub fn get_item(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Iterate over the line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all line items (the header badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }
}
