//! Shopcart Domain Concerns

pub mod carts;
pub mod catalog;
pub mod checkout;
pub mod contact;
