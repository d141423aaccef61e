//! Contact errors.

use thiserror::Error;

/// Form-level validation failures, reported one at a time.
#[derive(Debug, Error, PartialEq)]
pub enum ContactValidationError {
    /// A required field is empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The email address does not look deliverable.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Errors delivering a message to the form endpoint.
#[derive(Debug, Error)]
pub enum ContactDeliveryError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected response from form endpoint: {0}")]
    UnexpectedResponse(String),
}
