//! Error types for catalog loading

use finder_domain::ProductId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the catalog or its category table
///
/// All of these are fatal at startup: queries cannot be served from a
/// partially loaded catalog.
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    /// Source file does not exist
    #[error("Catalog source not found: {0}")]
    NotFound(PathBuf),

    /// Source file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Source is not a well-formed array of product objects
    #[error("Malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record parsed but violates the product invariants
    #[error("Invalid product record at index {index}: {reason}")]
    InvalidRecord {
        /// Position of the record in the source array
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Two records share an id
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// Category assignment table could not be parsed
    #[error("Invalid category assignment table: {0}")]
    Assignment(String),
}

impl From<toml::de::Error> for CatalogLoadError {
    fn from(e: toml::de::Error) -> Self {
        CatalogLoadError::Assignment(e.to_string())
    }
}
