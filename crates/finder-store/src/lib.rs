//! Finder Catalog Store
//!
//! Implements the `ProductCatalog` trait over a JSON product source plus a
//! static category assignment table.
//!
//! # Architecture
//!
//! - The product source is a JSON array of `{id, name, description, price, image}`
//! - Categories come from a separate id → label table (built in or TOML)
//! - Everything is loaded once at startup and never mutated afterwards, so a
//!   `Catalog` can be shared across threads behind an `Arc` without locking
//!
//! # Examples
//!
//! ```
//! use finder_store::Catalog;
//! use finder_domain::{apply, StructuredFilter};
//!
//! let catalog = Catalog::bundled().unwrap();
//! let filter = StructuredFilter::default().with_category("clothes").with_max_price(50.0);
//!
//! let names: Vec<_> = apply(&filter, &catalog).into_iter().map(|i| i.name).collect();
//! assert_eq!(names, vec!["T-Shirt", "UBC Hoodie"]);
//! ```

#![warn(missing_docs)]

mod assignment;
mod error;

pub use assignment::CategoryAssignment;
pub use error::CatalogLoadError;

use finder_domain::{CategoryLabel, Product, ProductCatalog, ProductId};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Product source bundled with the crate
const BUNDLED_PRODUCTS: &str = include_str!("../data/products.json");

/// One product object as it appears in the JSON source
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: u64,
    name: String,
    description: String,
    price: f64,
    image: String,
}

/// A loaded, immutable catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    assignments: CategoryAssignment,
    source: Option<PathBuf>,
}

impl Catalog {
    /// The bundled sample catalog with its built-in category table
    pub fn bundled() -> Result<Self, CatalogLoadError> {
        Ok(Self::from_json_str(BUNDLED_PRODUCTS)?.with_assignments(CategoryAssignment::builtin()))
    }

    /// Load products from a JSON file
    ///
    /// The returned catalog has no category assignments; attach them with
    /// [`Catalog::with_assignments`].
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the file is missing or unreadable
    /// - the contents are not an array of product objects
    /// - any record is missing a field, has a blank name, a negative price,
    ///   or repeats an earlier id
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let contents = read_source(path)?;
        let mut catalog = Self::from_json_str(&contents)?;
        catalog.source = Some(path.to_path_buf());
        info!("Loaded {} products from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse products from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;

        let mut seen = HashSet::with_capacity(records.len());
        let mut products = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let id = ProductId::new(record.id);
            if !seen.insert(id) {
                return Err(CatalogLoadError::DuplicateId(id));
            }
            let product = Product::new(id, record.name, record.description, record.price, record.image)
                .map_err(|reason| CatalogLoadError::InvalidRecord { index, reason })?;
            products.push(product);
        }

        debug!("Parsed {} product records", products.len());

        Ok(Self {
            products,
            assignments: CategoryAssignment::empty(),
            source: None,
        })
    }

    /// Load products and categories in one step
    ///
    /// Uses the built-in category table when `categories` is `None`.
    pub fn load<P: AsRef<Path>>(
        products: P,
        categories: Option<&Path>,
    ) -> Result<Self, CatalogLoadError> {
        let assignments = match categories {
            Some(path) => CategoryAssignment::load_toml(path)?,
            None => CategoryAssignment::builtin(),
        };
        Ok(Self::from_path(products)?.with_assignments(assignments))
    }

    /// Replace the category table
    pub fn with_assignments(mut self, assignments: CategoryAssignment) -> Self {
        self.assignments = assignments;
        self
    }

    /// The category table
    pub fn assignments(&self) -> &CategoryAssignment {
        &self.assignments
    }

    /// Look up a product by id
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// File the products were loaded from, `None` for the bundled catalog
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Product ids with no category assignment
    pub fn unassigned(&self) -> Vec<ProductId> {
        self.products
            .iter()
            .map(|p| p.id)
            .filter(|id| self.assignments.get(*id).is_none())
            .collect()
    }
}

impl ProductCatalog for Catalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn category_of(&self, id: ProductId) -> Option<&CategoryLabel> {
        self.assignments.get(id)
    }
}

/// Read a source file, distinguishing "missing" from other I/O failures
pub(crate) fn read_source(path: &Path) -> Result<String, CatalogLoadError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CatalogLoadError::NotFound(path.to_path_buf())
        } else {
            CatalogLoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.len(), 13);
        assert!(catalog.unassigned().is_empty());
        assert!(catalog.source().is_none());
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().name, "MacBook Air");
    }

    #[test]
    fn test_preserves_source_order() {
        let catalog = Catalog::bundled().unwrap();
        let ids: Vec<u64> = catalog.products().iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, (0..13).collect::<Vec<_>>());
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let json = r#"[{"id": 0, "name": "Hoodie", "price": 40.0, "image": "h.png"}]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogLoadError::Malformed(_))
        ));
    }

    #[test]
    fn test_not_an_array_is_malformed() {
        assert!(matches!(
            Catalog::from_json_str(r#"{"id": 0}"#),
            Err(CatalogLoadError::Malformed(_))
        ));
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let json = r#"[{"id": 0, "name": "X", "description": "", "price": "cheap", "image": ""}]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogLoadError::Malformed(_))
        ));
    }

    #[test]
    fn test_negative_price_is_invalid() {
        let json = r#"[
            {"id": 0, "name": "A", "description": "", "price": 1.0, "image": ""},
            {"id": 1, "name": "B", "description": "", "price": -1.0, "image": ""}
        ]"#;
        match Catalog::from_json_str(json) {
            Err(CatalogLoadError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_id() {
        let json = r#"[
            {"id": 3, "name": "A", "description": "", "price": 1.0, "image": ""},
            {"id": 3, "name": "B", "description": "", "price": 2.0, "image": ""}
        ]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogLoadError::DuplicateId(id)) if id == ProductId::new(3)
        ));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"[{"id": 0, "name": "A", "description": "", "price": 1.0, "image": "", "sku": "x"}]"#;
        assert_eq!(Catalog::from_json_str(json).unwrap().len(), 1);
    }

    #[test]
    fn test_category_of_without_assignments() {
        let json = r#"[{"id": 0, "name": "A", "description": "", "price": 1.0, "image": ""}]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert!(catalog.category_of(ProductId::new(0)).is_none());
        assert_eq!(catalog.unassigned(), vec![ProductId::new(0)]);
    }
}
