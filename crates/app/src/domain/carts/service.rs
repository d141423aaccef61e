//! Carts service.

use mockall::automock;
use shopcart::{
    cart::{Cart, CartError, LineItem},
    notify::CartNotifier,
    products::{Product, ProductId},
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{domain::carts::errors::CartsServiceError, storage::KeyValueStore};

/// Store key of the singleton cart document.
const CART_KEY: &str = "cart";

/// The cart store, backed by a key-value medium.
///
/// Every mutation is a read-modify-write of the whole document. Writes that
/// change the document are followed by exactly one change broadcast; no-op
/// writes touch neither the store nor the notifier.
#[derive(Debug)]
pub struct KvCartsService<S> {
    store: S,
    notifier: CartNotifier,
}

impl<S: KeyValueStore> KvCartsService<S> {
    #[must_use]
    pub fn new(store: S, notifier: CartNotifier) -> Self {
        Self { store, notifier }
    }

    /// The change broadcast shared with interested views.
    #[must_use]
    pub fn notifier(&self) -> &CartNotifier {
        &self.notifier
    }

    fn load(&self) -> Result<Cart, CartsServiceError> {
        let Some(blob) = self.store.get(CART_KEY)? else {
            return Ok(Cart::new());
        };

        match parse_document(&blob) {
            Ok(cart) => Ok(cart),
            Err(error) => {
                // A document we cannot decode is unrecoverable; starting
                // over beats refusing every cart operation from here on.
                warn!(%error, "discarding corrupt cart document");

                Ok(Cart::new())
            }
        }
    }

    fn persist(&self, cart: &Cart) -> Result<(), CartsServiceError> {
        let blob = serde_json::to_string(cart)?;

        self.store.put(CART_KEY, &blob)?;
        self.notifier.notify();

        Ok(())
    }
}

#[derive(Debug, Error)]
enum DocumentError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Cart(#[from] CartError),
}

fn parse_document(blob: &str) -> Result<Cart, DocumentError> {
    let items: Vec<LineItem> = serde_json::from_str(blob)?;

    Ok(Cart::with_items(items)?)
}

impl<S: KeyValueStore> CartsService for KvCartsService<S> {
    fn get_cart(&self) -> Result<Cart, CartsServiceError> {
        self.load()
    }

    fn add_item(&self, product: &Product, quantity: u32) -> Result<Cart, CartsServiceError> {
        let mut cart = self.load()?;

        if cart.add_item(product, quantity) {
            debug!(product = product.id, quantity, "cart item added");

            self.persist(&cart)?;
        }

        Ok(cart)
    }

    fn remove_item(&self, id: ProductId) -> Result<bool, CartsServiceError> {
        let mut cart = self.load()?;
        let changed = cart.remove_item(id);

        if changed {
            debug!(product = id, "cart item removed");

            self.persist(&cart)?;
        }

        Ok(changed)
    }

    fn set_quantity(&self, id: ProductId, quantity: u32) -> Result<bool, CartsServiceError> {
        let mut cart = self.load()?;
        let changed = cart.set_quantity(id, quantity);

        if changed {
            debug!(product = id, quantity, "cart quantity set");

            self.persist(&cart)?;
        }

        Ok(changed)
    }

    fn clear(&self) -> Result<bool, CartsServiceError> {
        let mut cart = self.load()?;
        let changed = cart.clear();

        if changed {
            debug!("cart cleared");

            self.persist(&cart)?;
        }

        Ok(changed)
    }
}

/// Reads and writes the singleton cart document.
#[automock]
pub trait CartsService: Send + Sync {
    /// Read the current cart document. A missing or corrupt document reads
    /// as an empty cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartsServiceError`] when the store cannot be read.
    fn get_cart(&self) -> Result<Cart, CartsServiceError>;

    /// Add a product at the given quantity, merging with an existing line
    /// item for the same product id. Returns the updated cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartsServiceError`] when the store cannot be read or
    /// written.
    fn add_item(&self, product: &Product, quantity: u32) -> Result<Cart, CartsServiceError>;

    /// Remove the line item with the given product id. Returns whether the
    /// document changed.
    ///
    /// # Errors
    ///
    /// Returns a [`CartsServiceError`] when the store cannot be read or
    /// written.
    fn remove_item(&self, id: ProductId) -> Result<bool, CartsServiceError>;

    /// Replace a line item's quantity. Quantities below 1 and unknown ids
    /// are rejected as no-ops. Returns whether the document changed.
    ///
    /// # Errors
    ///
    /// Returns a [`CartsServiceError`] when the store cannot be read or
    /// written.
    fn set_quantity(&self, id: ProductId, quantity: u32) -> Result<bool, CartsServiceError>;

    /// Remove every line item. Returns whether the document changed.
    ///
    /// # Errors
    ///
    /// Returns a [`CartsServiceError`] when the store cannot be read or
    /// written.
    fn clear(&self) -> Result<bool, CartsServiceError>;
}
