//! Coupon Fixtures

use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::Deserialize;

use crate::{coupons::Coupon, fixtures::FixtureError, products::ProductId};

/// Wrapper for coupons in YAML
#[derive(Debug, Deserialize)]
pub struct CouponsFixture {
    /// Coupons, in the order they should be tried
    pub coupons: Vec<CouponFixture>,
}

/// Coupon Fixture
///
/// Upstream coupon exports spell some fields differently (`cout`, `idProduit`),
/// so those are accepted as aliases.
#[derive(Debug, Deserialize)]
pub struct CouponFixture {
    /// Coupon code
    #[serde(default)]
    pub code: String,

    /// Number of line items the coupon may discount
    #[serde(default = "default_count", alias = "cout")]
    pub count: u32,

    /// Targeted product
    #[serde(alias = "idProduit")]
    pub product: ProductId,

    /// Discount (e.g., "15%", "15" or 15)
    #[serde(default)]
    pub percent: Option<PercentFixture>,
}

/// A percentage written either as a number or as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PercentFixture {
    /// Bare number of percentage points
    Number(f64),

    /// String such as `"15%"`
    Text(String),
}

fn default_count() -> u32 {
    1
}

impl TryFrom<CouponFixture> for Coupon {
    type Error = FixtureError;

    fn try_from(fixture: CouponFixture) -> Result<Self, Self::Error> {
        let coupon = Coupon::new(fixture.code, fixture.count, fixture.product);

        let percent = match fixture.percent {
            None => return Ok(coupon),
            Some(PercentFixture::Number(value)) => Decimal::from_f64(value)
                .ok_or_else(|| FixtureError::InvalidPercentage(value.to_string()))?,
            Some(PercentFixture::Text(text)) => parse_percent(&text)?,
        };

        Ok(coupon.with_percent(percent))
    }
}

/// Parse a percentage string (e.g., "15%" or "15") into percentage points.
///
/// Unlike promotion fixtures, a bare number is read as points, not as a fraction.
///
/// # Errors
///
/// Returns an error if the string is not a decimal number.
pub fn parse_percent(s: &str) -> Result<Decimal, FixtureError> {
    let trimmed = s.trim();
    let points = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    points
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))
}

/// Parse a YAML coupon list.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or a percentage cannot be parsed.
pub fn parse_coupons(yaml: &str) -> Result<Vec<Coupon>, FixtureError> {
    let fixture: CouponsFixture = serde_norway::from_str(yaml)?;

    fixture.coupons.into_iter().map(Coupon::try_from).collect()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_percent_accepts_both_formats() -> TestResult {
        assert_eq!(parse_percent("15%")?, Decimal::from(15));
        assert_eq!(parse_percent(" 12.5 % ")?, Decimal::new(125, 1));
        assert_eq!(parse_percent("20")?, Decimal::from(20));

        Ok(())
    }

    #[test]
    fn parse_percent_rejects_garbage() {
        let result = parse_percent("lots");

        assert!(matches!(result, Err(FixtureError::InvalidPercentage(s)) if s == "lots"));
    }

    #[test]
    fn parse_coupons_accepts_upstream_field_names() -> TestResult {
        let coupons = parse_coupons(
            r#"
coupons:
  - code: ""
    cout: 2
    idProduit: 1
"#,
        )?;

        assert_eq!(coupons, vec![Coupon::new("", 2, 1)]);

        Ok(())
    }

    #[test]
    fn parse_coupons_reads_percentages() -> TestResult {
        let coupons = parse_coupons(
            r#"
coupons:
  - code: APPLE20
    product: 1
    percent: "20%"
  - code: PEAR
    count: 3
    product: 2
    percent: 12.5
"#,
        )?;

        assert_eq!(
            coupons,
            vec![
                Coupon::new("APPLE20", 1, 1).with_percent(Decimal::from(20)),
                Coupon::new("PEAR", 3, 2).with_percent(Decimal::new(125, 1)),
            ]
        );

        Ok(())
    }

    #[test]
    fn parse_coupons_requires_product() {
        let result = parse_coupons("coupons:\n  - code: NOPE\n");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }
}
