//! Contact

pub mod errors;
pub mod models;
pub mod service;

pub use errors::{ContactDeliveryError, ContactValidationError};
pub use models::ContactMessage;
pub use service::*;
