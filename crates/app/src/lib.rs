//! Storefront application services: cart persistence, catalog access,
//! checkout orchestration and contact-form delivery.

pub mod config;
pub mod context;
pub mod domain;
pub mod storage;

#[cfg(test)]
mod test;
