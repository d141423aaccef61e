//! Contact delivery service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use tracing::info;

use crate::domain::contact::{errors::ContactDeliveryError, models::ContactMessage};

/// Delivers contact messages to the shop.
#[automock]
#[async_trait]
pub trait ContactDelivery: Send + Sync {
    /// Deliver one validated message.
    ///
    /// # Errors
    ///
    /// Returns a [`ContactDeliveryError`] when the endpoint cannot be
    /// reached or refuses the message.
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactDeliveryError>;
}

/// Configuration for the hosted form endpoint.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Form endpoint URL that accepts JSON posts.
    pub endpoint: String,
}

/// HTTP client posting messages to a hosted form endpoint.
#[derive(Debug, Clone)]
pub struct HttpContactService {
    config: ContactConfig,
    http: Client,
}

impl HttpContactService {
    #[must_use]
    pub fn new(config: ContactConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ContactDelivery for HttpContactService {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactDeliveryError> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .json(message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ContactDeliveryError::UnexpectedResponse(format!(
                "message delivery failed with status {status}: {text}"
            )));
        }

        info!(from = %message.email, "contact message delivered");

        Ok(())
    }
}
