//! Product module - the immutable catalog record and its display view

use crate::category::CategoryLabel;
use std::fmt;

/// Unique identifier for a product within a catalog
///
/// Product ids are non-negative integers assigned by the catalog source.
/// They key the category assignment table, which is kept separately from the
/// product records themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a ProductId from its raw value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A product in the catalog
///
/// Products are created once when the catalog is loaded and are never
/// mutated or removed while the process runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,

    /// Display name (never empty)
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Unit price (finite, non-negative)
    pub price: f64,

    /// Image reference, opaque to the core
    pub image: String,
}

impl Product {
    /// Create a new product, enforcing the record invariants
    ///
    /// # Errors
    /// Returns error if the name is blank or the price is negative or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use finder_domain::{Product, ProductId};
    ///
    /// let p = Product::new(ProductId::new(1), "MacBook Air", "Laptop", 999.0, "mac.png").unwrap();
    /// assert_eq!(p.price, 999.0);
    ///
    /// assert!(Product::new(ProductId::new(2), "  ", "", 1.0, "").is_err());
    /// assert!(Product::new(ProductId::new(3), "Bad", "", -1.0, "").is_err());
    /// ```
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Result<Self, String> {
        let product = Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Check the record invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("product {} has an empty name", self.id));
        }
        if !self.price.is_finite() {
            return Err(format!("product {} has a non-finite price", self.id));
        }
        if self.price < 0.0 {
            return Err(format!(
                "product {} has a negative price: {}",
                self.id, self.price
            ));
        }
        Ok(())
    }
}

/// A product joined with its resolved category, as handed to a view layer
///
/// Derived per query; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultItem {
    /// Product identifier
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Product price
    pub price: f64,
    /// Product image reference
    pub image: String,
    /// Category from the assignment table, `None` when unmapped
    pub category: Option<CategoryLabel>,
}

impl ResultItem {
    /// Compose a result item from a product and its category
    pub fn from_product(product: &Product, category: Option<CategoryLabel>) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image: product.image.clone(),
            category,
        }
    }

    /// Category label as a string, `"unknown"` when unmapped
    pub fn category_or_unknown(&self) -> &str {
        self.category
            .as_ref()
            .map(CategoryLabel::as_str)
            .unwrap_or("unknown")
    }
}
