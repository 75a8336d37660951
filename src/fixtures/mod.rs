//! Fixtures
//!
//! Coupon sets stored as YAML under `<base>/coupons/<name>.yml`.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::coupons::Coupon;

pub mod coupons;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Coupon set has not been loaded
    #[error("Coupon set not found: {0}")]
    CouponSetNotFound(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Loaded coupon sets by name
    coupon_sets: FxHashMap<String, Vec<Coupon>>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            coupon_sets: FxHashMap::default(),
        }
    }

    /// Load a coupon set from a YAML fixture file, replacing any set of the same name
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_coupons(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("coupons").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let coupons = coupons::parse_coupons(&contents)?;

        self.coupon_sets.insert(name.to_string(), coupons);

        Ok(self)
    }

    /// Get a loaded coupon set
    ///
    /// # Errors
    ///
    /// Returns an error if the set has not been loaded.
    pub fn coupons(&self, name: &str) -> Result<&[Coupon], FixtureError> {
        self.coupon_sets
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| FixtureError::CouponSetNotFound(name.to_string()))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use rust_decimal::Decimal;
    use tempfile::tempdir;
    use testresult::TestResult;

    use super::*;

    fn write_fixture(base: &Path, name: &str, contents: &str) -> TestResult {
        let dir = base.join("coupons");

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn fixture_loads_bundled_coupon_set() -> TestResult {
        let mut fixture = Fixture::new();

        fixture.load_coupons("apples")?;

        let coupons = fixture.coupons("apples")?;

        assert_eq!(coupons.len(), 2);
        assert_eq!(coupons.first().map(|c| c.percent), Some(None));

        Ok(())
    }

    #[test]
    fn fixture_loads_from_custom_base_path() -> TestResult {
        let dir = tempdir()?;

        write_fixture(
            dir.path(),
            "spring",
            "coupons:\n  - code: SPRING\n    product: 4\n    percent: 30%\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_coupons("spring")?;

        assert_eq!(
            fixture.coupons("spring")?,
            &[Coupon::new("SPRING", 1, 4).with_percent(Decimal::from(30))]
        );

        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() -> TestResult {
        let dir = tempdir()?;
        let mut fixture = Fixture::with_base_path(dir.path());

        let result = fixture.load_coupons("absent");

        assert!(matches!(result, Err(FixtureError::Io(_))));

        Ok(())
    }

    #[test]
    fn unloaded_set_is_not_found() {
        let fixture = Fixture::default();

        let result = fixture.coupons("never");

        assert!(matches!(result, Err(FixtureError::CouponSetNotFound(name)) if name == "never"));
    }
}
