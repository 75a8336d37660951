//! Coupons
//!
//! Per-product coupon records and how they resolve to a discount.
//!
//! Coupon data comes from outside the basket and is often incomplete, so
//! resolution is permissive: a coupon that names no usable percentage, or has
//! no uses left, simply resolves to nothing.

use rust_decimal::Decimal;

use crate::{
    discounts::Discount,
    products::{ProductId, ProductRef},
};

/// A per-product discount descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    /// Coupon code, possibly empty
    pub code: String,

    /// How many line items of the product this coupon may discount
    pub count: u32,

    /// The product this coupon targets
    pub product_id: ProductId,

    /// Discount in percentage points, when the coupon carries one
    pub percent: Option<Decimal>,
}

impl Coupon {
    /// Create a coupon without a percentage.
    pub fn new(code: impl Into<String>, count: u32, product_id: impl Into<ProductId>) -> Self {
        Self {
            code: code.into(),
            count,
            product_id: product_id.into(),
            percent: None,
        }
    }

    /// Set the coupon percentage.
    #[must_use]
    pub fn with_percent(mut self, percent: Decimal) -> Self {
        self.percent = Some(percent);
        self
    }

    /// Does this coupon target `product`? Labels never match.
    pub fn matches(&self, product: &ProductRef) -> bool {
        product.id() == Some(self.product_id)
    }

    /// The discount this coupon grants, if it is usable.
    pub fn discount(&self) -> Option<Discount> {
        if self.count == 0 {
            return None;
        }

        self.percent.and_then(|percent| Discount::new(self.code.as_str(), percent))
    }
}

/// Find the first coupon matching `product` that resolves to a usable discount.
pub fn resolve<'c>(
    coupons: &'c [Coupon],
    product: &ProductRef,
) -> Option<(&'c Coupon, Discount)> {
    coupons
        .iter()
        .filter(|coupon| coupon.matches(product))
        .find_map(|coupon| coupon.discount().map(|discount| (coupon, discount)))
}
