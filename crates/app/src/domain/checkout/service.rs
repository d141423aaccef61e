//! Checkout orchestration.

use std::sync::Arc;

use rusty_money::iso::Currency;
use shopcart::pricing::{self, CartTotals};
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    carts::CartsService,
    checkout::{
        errors::CheckoutError,
        gateway::PaymentGateway,
        models::{CheckoutDetails, CheckoutOutcome, PaymentOutcome, PaymentRequest},
    },
};

/// Drives a cart through payment: price it, charge it, and empty it only
/// once the gateway confirms completion.
pub struct CheckoutOrchestrator {
    carts: Arc<dyn CartsService>,
    gateway: Arc<dyn PaymentGateway>,
    currency: &'static Currency,
}

impl CheckoutOrchestrator {
    #[must_use]
    pub fn new(
        carts: Arc<dyn CartsService>,
        gateway: Arc<dyn PaymentGateway>,
        currency: &'static Currency,
    ) -> Self {
        Self {
            carts,
            gateway,
            currency,
        }
    }

    /// Run the checkout flow once.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there is nothing to charge,
    /// and propagates pricing, storage and gateway failures. A payer
    /// abandoning the payment is not an error; it surfaces as
    /// [`CheckoutOutcome::Cancelled`] with the cart untouched.
    pub async fn checkout(
        &self,
        details: &CheckoutDetails,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        let cart = self.carts.get_cart()?;

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let totals = CartTotals::of(cart.items());
        let amount_minor = pricing::amount_due_minor(cart.items(), self.currency)?;
        let reference = order_reference();

        info!(%reference, amount_minor, "submitting charge to the payment gateway");

        let outcome = self
            .gateway
            .charge(PaymentRequest {
                amount_minor,
                currency: self.currency,
                customer_email: details.email.clone(),
                reference,
            })
            .await?;

        match outcome {
            PaymentOutcome::Completed { reference } => {
                // The gateway's completion verdict is the only event trusted
                // to empty the cart.
                self.carts.clear()?;

                info!(%reference, "payment settled; cart emptied");

                Ok(CheckoutOutcome::Settled {
                    reference,
                    amount_minor,
                    totals,
                })
            }
            PaymentOutcome::Cancelled => {
                info!("payment abandoned; cart preserved");

                Ok(CheckoutOutcome::Cancelled)
            }
        }
    }
}

/// Order reference in the `PAY-` namespace; time-ordered so a provider's
/// dashboard lists charges in creation order.
fn order_reference() -> String {
    format!("PAY-{}", Uuid::now_v7())
}
