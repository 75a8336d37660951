//! Basket

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    coupons::{self, Coupon},
    discounts::Discount,
    items::LineItem,
    pricing::{TotalPriceError, total_price},
    products::ProductRef,
};

/// Errors related to basket construction or discounts.
#[derive(Debug, Error, PartialEq)]
pub enum BasketError {
    /// An item was priced at zero or below (price in minor units).
    #[error("Item price must be greater than zero, got {0}")]
    InvalidPrice(i64),

    /// A discount percentage was zero or below.
    #[error("Discount percentage must be greater than zero, got {0}")]
    InvalidDiscount(Decimal),

    /// An item's currency differs from the basket currency (item currency, basket currency).
    #[error("Item has currency {0}, but basket has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// An item was not found in the basket.
    #[error("Item {0} not found")]
    ItemNotFound(usize),
}

/// Basket
///
/// Holds line items in insertion order and at most one basket-wide discount.
/// Once a discount is attached, further calls to [`Basket::apply_discount`]
/// are ignored.
#[derive(Debug)]
pub struct Basket<'a> {
    items: Vec<LineItem<'a>>,
    discount: Option<Discount>,
    currency: &'static Currency,
}

impl<'a> Basket<'a> {
    /// Create a new, empty basket.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Basket {
            items: Vec::new(),
            discount: None,
            currency,
        }
    }

    /// Add an item to the basket.
    ///
    /// # Errors
    ///
    /// - [`BasketError::InvalidPrice`]: the price is zero or negative.
    /// - [`BasketError::CurrencyMismatch`]: the price is not in the basket currency.
    ///
    /// The basket is unchanged on error.
    pub fn add_item(
        &mut self,
        product: impl Into<ProductRef>,
        price: Money<'a, Currency>,
    ) -> Result<(), BasketError> {
        let minor = price.to_minor_units();

        if minor <= 0 {
            return Err(BasketError::InvalidPrice(minor));
        }

        let item_currency = price.currency();

        if item_currency != self.currency {
            return Err(BasketError::CurrencyMismatch(
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        let item = LineItem::new(product, price);

        debug!(product = %item.product(), price = minor, "added item to basket");

        self.items.push(item);

        Ok(())
    }

    /// Apply a basket-wide percentage discount.
    ///
    /// Only the first successful call has an effect; later calls return `Ok(())`
    /// and leave the attached discount untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::InvalidDiscount`] if `percent` is zero or negative,
    /// whether or not a discount is already attached.
    pub fn apply_discount(
        &mut self,
        code: impl Into<String>,
        percent: Decimal,
    ) -> Result<(), BasketError> {
        let discount = Discount::new(code, percent).ok_or(BasketError::InvalidDiscount(percent))?;

        if let Some(existing) = &self.discount {
            debug!(
                attached = existing.code(),
                ignored = discount.code(),
                "basket already has a discount, ignoring"
            );

            return Ok(());
        }

        debug!(code = discount.code(), percent = %percent, "applied basket discount");

        self.discount = Some(discount);

        Ok(())
    }

    /// Apply the first usable coupon for `product` to that product's line items.
    ///
    /// Coupons that do not target the product, carry no positive percentage, or
    /// have no uses are skipped. When nothing resolves this is a no-op. At most
    /// `count` line items are discounted, in insertion order, and items that
    /// already carry a product discount keep it.
    ///
    /// Returns the number of line items discounted.
    pub fn apply_discount_for_product(
        &mut self,
        coupons: &[Coupon],
        product: &ProductRef,
    ) -> usize {
        let Some((coupon, discount)) = coupons::resolve(coupons, product) else {
            debug!(product = %product, "no usable coupon for product, ignoring");

            return 0;
        };

        let limit = usize::try_from(coupon.count).unwrap_or(usize::MAX);
        let mut applied = 0;

        for item in self
            .items
            .iter_mut()
            .filter(|item| coupon.matches(item.product()) && item.product_discount().is_none())
            .take(limit)
        {
            if item.attach_product_discount(&discount) {
                applied += 1;
            }
        }

        debug!(
            product = %product,
            code = discount.code(),
            percent = %discount.percent(),
            applied,
            "applied product coupon"
        );

        applied
    }

    /// Calculate the total after discounts.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if a discounted price cannot be represented in
    /// minor units.
    pub fn calculate_total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(&self.items, self.discount.as_ref(), self.currency)
    }

    /// Calculate the subtotal of the basket, before any discounts.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if there was a money arithmetic error.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        self.items
            .iter()
            .try_fold(Money::from_minor(0, self.currency), |acc, item| {
                Ok(acc.add(*item.price())?)
            })
    }

    /// The basket-wide discount, if one is attached.
    pub fn discount(&self) -> Option<&Discount> {
        self.discount.as_ref()
    }

    /// Has a basket-wide discount been attached?
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount.is_some()
    }

    /// Get an item from the basket.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError::ItemNotFound` if the item is not found.
    pub fn get_item(&self, item: usize) -> Result<&LineItem<'a>, BasketError> {
        self.items.get(item).ok_or(BasketError::ItemNotFound(item))
    }

    /// Iterate over the items in the basket.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.items.iter()
    }

    /// Get the number of items in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the basket.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
