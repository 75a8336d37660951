//! Items

use rusty_money::{Money, iso::Currency};

use crate::{discounts::Discount, products::ProductRef};

/// A priced product entry within a basket.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem<'a> {
    product: ProductRef,
    price: Money<'a, Currency>,
    product_discount: Option<Discount>,
}

impl<'a> LineItem<'a> {
    /// Creates a new line item with no product discount.
    pub fn new(product: impl Into<ProductRef>, price: Money<'a, Currency>) -> Self {
        Self {
            product: product.into(),
            price,
            product_discount: None,
        }
    }

    /// Returns the product of the item
    pub fn product(&self) -> &ProductRef {
        &self.product
    }

    /// Returns the price of the item
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Returns the coupon discount applied to this item alone, if any.
    pub fn product_discount(&self) -> Option<&Discount> {
        self.product_discount.as_ref()
    }

    /// Attach a product discount unless one is already present.
    ///
    /// Returns `true` if the discount was attached.
    pub(crate) fn attach_product_discount(&mut self, discount: &Discount) -> bool {
        if self.product_discount.is_some() {
            return false;
        }

        self.product_discount = Some(discount.clone());

        true
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let item = LineItem::new("Apple", Money::from_minor(100, GBP));

        assert_eq!(item.product(), &ProductRef::from("Apple"));
        assert_eq!(item.price(), &Money::from_minor(100, GBP));
        assert!(item.product_discount().is_none());
    }

    #[test]
    fn product_discount_is_only_attached_once() -> TestResult {
        let mut item = LineItem::new(Product::new(1, "apple"), Money::from_minor(200, GBP));
        let first = Discount::new("FIRST", Decimal::from(10)).ok_or("discount")?;
        let second = Discount::new("SECOND", Decimal::from(50)).ok_or("discount")?;

        assert!(item.attach_product_discount(&first));
        assert!(!item.attach_product_discount(&second));
        assert_eq!(item.product_discount(), Some(&first));

        Ok(())
    }
}
