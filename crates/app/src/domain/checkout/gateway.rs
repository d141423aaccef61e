//! Payment gateway seam.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tracing::info;

use crate::domain::checkout::models::{PaymentOutcome, PaymentRequest};

/// Errors from the payment provider, distinct from the payer cancelling.
#[derive(Debug, Error)]
pub enum PaymentGatewayError {
    /// The provider refused to take the charge at all.
    #[error("payment provider rejected the request: {0}")]
    Rejected(String),
}

/// The payment widget boundary: one charge in, one verdict out.
///
/// Implementations own the entire payment interaction; callers learn nothing
/// beyond the outcome.
#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Run the payment flow for one charge.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentGatewayError`] when the provider fails; a payer
    /// cancelling is reported as [`PaymentOutcome::Cancelled`], not as an
    /// error.
    async fn charge(&self, request: PaymentRequest)
    -> Result<PaymentOutcome, PaymentGatewayError>;
}

/// A gateway that settles (or abandons) every charge locally, for demo runs.
#[derive(Debug, Clone)]
pub struct DemoPaymentGateway {
    approve: bool,
}

impl DemoPaymentGateway {
    /// Completes every charge when `approve` is true, abandons every charge
    /// otherwise.
    #[must_use]
    pub fn new(approve: bool) -> Self {
        Self { approve }
    }
}

#[async_trait]
impl PaymentGateway for DemoPaymentGateway {
    async fn charge(
        &self,
        request: PaymentRequest,
    ) -> Result<PaymentOutcome, PaymentGatewayError> {
        if self.approve {
            info!(
                reference = %request.reference,
                amount_minor = request.amount_minor,
                "demo gateway settled the charge"
            );

            Ok(PaymentOutcome::Completed {
                reference: request.reference,
            })
        } else {
            info!(reference = %request.reference, "demo gateway abandoned the charge");

            Ok(PaymentOutcome::Cancelled)
        }
    }
}
