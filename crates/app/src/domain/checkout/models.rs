//! Checkout models.

use rusty_money::iso::Currency;
use shopcart::pricing::CartTotals;

/// Shipping and contact fields collected by the checkout form.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutDetails {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

/// One charge handed to the payment gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    /// Amount due in the currency's minor units.
    pub amount_minor: i64,

    /// Currency of the charge.
    pub currency: &'static Currency,

    /// Payer email, forwarded to the payment form.
    pub customer_email: String,

    /// Order reference identifying this charge.
    pub reference: String,
}

/// The gateway's verdict on one charge.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    /// The payer completed the payment flow.
    Completed {
        /// Reference echoed back by the gateway.
        reference: String,
    },

    /// The payer abandoned the payment flow.
    Cancelled,
}

/// Result of a checkout run.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Payment settled; the cart has been emptied.
    Settled {
        /// Order reference of the settled charge.
        reference: String,

        /// Amount charged, in minor units.
        amount_minor: i64,

        /// The order figures the charge was computed from.
        totals: CartTotals,
    },

    /// Payment abandoned; the cart is untouched.
    Cancelled,
}
