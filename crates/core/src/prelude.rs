//! Shopcart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, LineItem},
    fixtures::{Fixture, FixtureError},
    notify::{CartNotifier, Subscription},
    pricing::{
        CartTotals, PricingError, amount_due_minor, flat_shipping_fee, free_shipping_threshold,
        grand_total, savings, shipping_fee, subtotal, tax, tax_rate,
    },
    products::{Product, ProductId},
    receipt::{Receipt, ReceiptError},
};
