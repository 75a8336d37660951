//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    discounts::{Discount, DiscountError},
    items::LineItem,
};

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// A discount could not be applied to an item price.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the price paid for a single item.
///
/// The item's own product discount is applied first, then the basket-wide
/// discount, if any.
///
/// # Errors
///
/// Returns a [`DiscountError`] if a discount cannot be represented in minor units.
pub fn effective_price<'a>(
    item: &LineItem<'a>,
    basket_discount: Option<&Discount>,
) -> Result<Money<'a, Currency>, DiscountError> {
    let price = match item.product_discount() {
        Some(discount) => discount.apply(*item.price())?,
        None => *item.price(),
    };

    match basket_discount {
        Some(discount) => discount.apply(price),
        None => Ok(price),
    }
}

/// Calculates the total price of a list of items, in insertion order.
///
/// An empty list totals zero in `currency`.
///
/// # Errors
///
/// - [`TotalPriceError::Discount`]: a discount could not be applied to an item.
/// - [`TotalPriceError::Money`]: money arithmetic or currency mismatch error.
pub fn total_price<'a>(
    items: &[LineItem<'a>],
    basket_discount: Option<&Discount>,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    items
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, item| {
            Ok(acc.add(effective_price(item, basket_discount)?)?)
        })
}
