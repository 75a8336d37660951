//! Discounts

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,
}

/// A percentage discount identified by its coupon code.
///
/// `percent` is expressed in percentage points, so `25` means 25% off. Values
/// above 100 are allowed and push prices below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discount {
    code: String,
    percent: Decimal,
}

impl Discount {
    /// Create a discount, or `None` unless `percent` is strictly positive.
    pub fn new(code: impl Into<String>, percent: Decimal) -> Option<Self> {
        (percent > Decimal::ZERO).then(|| Self {
            code: code.into(),
            percent,
        })
    }

    /// Returns the coupon code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the discount in percentage points
    pub fn percent(&self) -> Decimal {
        self.percent
    }

    /// Returns the discount as a fractional percentage (25 points is 0.25).
    pub fn percentage(&self) -> Percentage {
        Percentage::from(self.percent / Decimal::ONE_HUNDRED)
    }

    /// Reduce `price` by this discount.
    ///
    /// The reduction is rounded up to a whole minor unit, so a positive price
    /// always comes out strictly lower.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::PercentConversion`] if the reduction cannot be
    /// represented in minor units.
    pub fn apply<'a>(
        &self,
        price: Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        let minor = price.to_minor_units();

        let mut reduction = percent_of_minor(&self.percentage(), minor)?;

        // percentages too small for Decimal's scale collapse to zero
        if minor > 0 {
            reduction = reduction.max(1);
        }

        let discounted = minor
            .checked_sub(reduction)
            .ok_or(DiscountError::PercentConversion)?;

        Ok(Money::from_minor(discounted, price.currency()))
    }
}

/// Calculate the discount amount in minor units based on a percentage and a minor unit amount.
///
/// Any fractional part rounds away from zero, so a non-zero share of a non-zero
/// amount is never less than one minor unit.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the calculation overflows.
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    // multiplying by one is the only way to get a Decimal back out of a Percentage
    let fraction = (*percent) * Decimal::ONE;

    fraction
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::AwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}
