//! Checkout errors.

use shopcart::pricing::PricingError;
use thiserror::Error;

use crate::domain::{carts::CartsServiceError, checkout::gateway::PaymentGatewayError};

/// Errors from the checkout flow. A payer abandoning the payment is not an
/// error; see [`super::models::CheckoutOutcome::Cancelled`].
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// There is nothing to charge.
    #[error("cart is empty; nothing to charge")]
    EmptyCart,

    /// The amount due could not be expressed in minor units.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Reading or clearing the cart failed.
    #[error(transparent)]
    Carts(#[from] CartsServiceError),

    /// The payment provider failed outright.
    #[error(transparent)]
    Payment(#[from] PaymentGatewayError),
}
