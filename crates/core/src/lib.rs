//! Shopcart
//!
//! Shopcart is a storefront cart and pricing engine: a single cart document
//! with merge-by-id line items, pure order pricing, and a cart-change
//! broadcast that keeps independently-rendered views in sync.

pub mod cart;
pub mod fixtures;
pub mod notify;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
