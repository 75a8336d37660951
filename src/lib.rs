//! Till
//!
//! Till prices shopping baskets: line items, a single-use basket-wide percentage discount,
//! and per-product coupons.

pub mod basket;
pub mod coupons;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod products;
