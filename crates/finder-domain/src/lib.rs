//! Finder Domain Layer
//!
//! This crate contains the product model and the deterministic filtering core.
//! It has ZERO runtime dependencies and defines the value objects and trait
//! interfaces that the storage, LLM and interpreter layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Product**: An immutable catalog record, created once at load
//! - **Category Label**: A normalized category string (`clothing`, `electronics`, ...)
//! - **Structured Filter**: The (category, min price, max price) intent of a query
//! - **Result Item**: A product joined with its resolved category, ready for display
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure business logic only
//! - Catalog loading and LLM access live in other crates
//! - Trait definitions for all external interactions
//!
//! # Examples
//!
//! ```
//! use finder_domain::{apply, Product, ProductId, StructuredFilter, StaticCatalog};
//!
//! let catalog = StaticCatalog::new(vec![
//!     Product::new(ProductId::new(0), "Hoodie", "Warm", 40.0, "hoodie.png").unwrap(),
//!     Product::new(ProductId::new(5), "Shoes", "Fast", 60.0, "shoes.png").unwrap(),
//! ])
//! .with_category(ProductId::new(0), "clothing")
//! .with_category(ProductId::new(5), "clothing");
//!
//! let filter = StructuredFilter::default()
//!     .with_category("apparel")
//!     .with_max_price(50.0);
//!
//! let results = apply(&filter, &catalog);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "Hoodie");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod engine;
pub mod event;
pub mod filter;
pub mod product;
pub mod traits;

// Re-exports for convenience
pub use category::{canonical_labels, normalize, synonyms_of, CategoryLabel};
pub use engine::apply;
pub use event::{final_text, AgentEvent};
pub use filter::{PriceBound, StructuredFilter};
pub use product::{Product, ProductId, ResultItem};
pub use traits::{LlmProvider, ProductCatalog, StaticCatalog};
