//! Static product id → category table
//!
//! The catalog source carries no category field, so categories are kept in a
//! separate, hand-maintained table keyed by product id. The table is either
//! the built-in one for the bundled catalog or a TOML file:
//!
//! ```toml
//! [categories]
//! 0 = "clothing"
//! 1 = "electronics"
//! ```

use crate::error::CatalogLoadError;
use finder_domain::{CategoryLabel, ProductId};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::debug;

/// Built-in assignments for the bundled catalog
const BUILTIN: &[(u64, &str)] = &[
    (0, "clothing"),    // UBC Hoodie
    (5, "clothing"),    // Running Shoes
    (7, "clothing"),    // T-Shirt
    (8, "clothing"),    // Denim Jacket
    (1, "electronics"), // MacBook Air
    (2, "electronics"), // Bluetooth Headphones
    (3, "electronics"), // Smartwatch
    (4, "electronics"), // USB-C Hub
    (6, "accessories"), // Backpack
    (9, "groceries"),   // Organic Apples
    (10, "groceries"),  // Whole Wheat Bread
    (11, "groceries"),  // Almond Milk
    (12, "groceries"),  // Brown Rice
];

#[derive(Deserialize)]
struct AssignmentFile {
    #[serde(default)]
    categories: BTreeMap<String, String>,
}

/// Immutable mapping from product id to category label
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryAssignment {
    labels: HashMap<ProductId, CategoryLabel>,
}

impl CategoryAssignment {
    /// An empty table: every product is uncategorized
    pub fn empty() -> Self {
        Self::default()
    }

    /// The table for the bundled catalog
    pub fn builtin() -> Self {
        BUILTIN
            .iter()
            .map(|(id, label)| (ProductId::new(*id), CategoryLabel::parse(label)))
            .collect()
    }

    /// Parse a table from TOML text
    ///
    /// Labels are normalized on load, so `"apparel"` is stored as `clothing`.
    ///
    /// # Errors
    /// Returns `CatalogLoadError::Assignment` if the TOML is malformed or a key
    /// is not a non-negative integer.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, CatalogLoadError> {
        let file: AssignmentFile = toml::from_str(toml_str)?;

        let mut labels = HashMap::with_capacity(file.categories.len());
        for (key, label) in file.categories {
            let id: u64 = key.trim().parse().map_err(|_| {
                CatalogLoadError::Assignment(format!("'{}' is not a product id", key))
            })?;
            labels.insert(ProductId::new(id), CategoryLabel::parse(&label));
        }

        Ok(Self { labels })
    }

    /// Load a table from a TOML file
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let contents = crate::read_source(path)?;
        let table = Self::from_toml_str(&contents)?;
        debug!("Loaded {} category assignments from {}", table.len(), path.display());
        Ok(table)
    }

    /// Category for a product id, `None` when unmapped
    pub fn get(&self, id: ProductId) -> Option<&CategoryLabel> {
        self.labels.get(&id)
    }

    /// Number of mapped ids
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Entries ordered by product id
    pub fn entries(&self) -> Vec<(ProductId, &CategoryLabel)> {
        let mut entries: Vec<_> = self.labels.iter().map(|(id, label)| (*id, label)).collect();
        entries.sort_by_key(|(id, _)| *id);
        entries
    }
}

impl FromIterator<(ProductId, CategoryLabel)> for CategoryAssignment {
    fn from_iter<I: IntoIterator<Item = (ProductId, CategoryLabel)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_bundled_catalog() {
        let table = CategoryAssignment::builtin();
        assert_eq!(table.len(), 13);
        assert_eq!(table.get(ProductId::new(0)).unwrap().as_str(), "clothing");
        assert_eq!(table.get(ProductId::new(4)).unwrap().as_str(), "electronics");
        assert_eq!(table.get(ProductId::new(6)).unwrap().as_str(), "accessories");
        assert_eq!(table.get(ProductId::new(12)).unwrap().as_str(), "groceries");
        assert!(table.get(ProductId::new(13)).is_none());
    }

    #[test]
    fn test_from_toml_normalizes_labels() {
        let table = CategoryAssignment::from_toml_str(
            r#"
            [categories]
            0 = "Apparel"
            "7" = " tech "
            "#,
        )
        .unwrap();
        assert_eq!(table.get(ProductId::new(0)).unwrap().as_str(), "clothing");
        assert_eq!(table.get(ProductId::new(7)).unwrap().as_str(), "electronics");
    }

    #[test]
    fn test_from_toml_rejects_bad_key() {
        let result = CategoryAssignment::from_toml_str("[categories]\nhoodie = \"clothing\"\n");
        assert!(matches!(result, Err(CatalogLoadError::Assignment(_))));
    }

    #[test]
    fn test_from_toml_rejects_malformed() {
        let result = CategoryAssignment::from_toml_str("[categories\n");
        assert!(matches!(result, Err(CatalogLoadError::Assignment(_))));
    }

    #[test]
    fn test_missing_section_is_empty_table() {
        let table = CategoryAssignment::from_toml_str("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_entries_are_sorted() {
        let ids: Vec<u64> = CategoryAssignment::builtin()
            .entries()
            .iter()
            .map(|(id, _)| id.value())
            .collect();
        assert_eq!(ids, (0..13).collect::<Vec<_>>());
    }
}
