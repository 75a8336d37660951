//! Products

use std::fmt;

use serde::Deserialize;

/// Product identifier, as referenced by coupon records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Creates a new product identifier
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,
}

impl Product {
    /// Creates a new product.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// What a line item was bought as: a bare label, or a product with an identifier.
///
/// Only structured products can be matched by coupons, since a label carries no
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductRef {
    /// An opaque label such as `"Apple"`.
    Label(String),

    /// A product descriptor.
    Product(Product),
}

impl ProductRef {
    /// Returns the product identifier, if this reference carries one.
    pub fn id(&self) -> Option<ProductId> {
        match self {
            ProductRef::Label(_) => None,
            ProductRef::Product(product) => Some(product.id),
        }
    }

    /// Returns the display name of the product.
    pub fn name(&self) -> &str {
        match self {
            ProductRef::Label(label) => label,
            ProductRef::Product(product) => &product.name,
        }
    }
}

impl fmt::Display for ProductRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductRef::Label(label) => f.write_str(label),
            ProductRef::Product(product) => write!(f, "{} (#{})", product.name, product.id),
        }
    }
}

impl From<&str> for ProductRef {
    fn from(label: &str) -> Self {
        ProductRef::Label(label.to_string())
    }
}

impl From<String> for ProductRef {
    fn from(label: String) -> Self {
        ProductRef::Label(label)
    }
}

impl From<Product> for ProductRef {
    fn from(product: Product) -> Self {
        ProductRef::Product(product)
    }
}

impl From<&Product> for ProductRef {
    fn from(product: &Product) -> Self {
        ProductRef::Product(product.clone())
    }
}
