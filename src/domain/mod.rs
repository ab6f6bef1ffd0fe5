//! Storefront vocabulary and the ports the checkout flows depend on.

pub mod order;
pub mod ports;
pub mod product;
