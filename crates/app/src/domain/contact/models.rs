//! Contact models.

use serde::Serialize;

use crate::domain::contact::errors::ContactValidationError;

/// One message for the shop, as the contact form collects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Check the form rules: every field filled in, email plausible.
    ///
    /// # Errors
    ///
    /// Returns a [`ContactValidationError`] naming the first failing field.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::MissingField("name"));
        }

        if self.email.trim().is_empty() {
            return Err(ContactValidationError::MissingField("email"));
        }

        if !self.email.contains('@') {
            return Err(ContactValidationError::InvalidEmail(self.email.clone()));
        }

        if self.message.trim().is_empty() {
            return Err(ContactValidationError::MissingField("message"));
        }

        Ok(())
    }
}
