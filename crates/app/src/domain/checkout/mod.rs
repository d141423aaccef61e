//! Checkout

pub mod errors;
pub mod gateway;
pub mod models;
pub mod service;

pub use errors::CheckoutError;
pub use gateway::*;
pub use service::*;
