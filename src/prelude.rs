//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError},
    coupons::Coupon,
    discounts::{Discount, DiscountError},
    fixtures::{Fixture, FixtureError},
    items::LineItem,
    pricing::TotalPriceError,
    products::{Product, ProductId, ProductRef},
};
