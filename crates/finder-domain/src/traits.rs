//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::event::AgentEvent;
use crate::{CategoryLabel, Product, ProductId};
use std::collections::HashMap;

/// Read-only access to a loaded catalog
///
/// Implemented by the infrastructure layer (finder-store)
pub trait ProductCatalog {
    /// Products in catalog order
    fn products(&self) -> &[Product];

    /// Category assigned to a product id, if any
    ///
    /// An unmapped id is a valid result, not an error.
    fn category_of(&self, id: ProductId) -> Option<&CategoryLabel>;
}

impl<T: ProductCatalog + ?Sized> ProductCatalog for &T {
    fn products(&self) -> &[Product] {
        (**self).products()
    }

    fn category_of(&self, id: ProductId) -> Option<&CategoryLabel> {
        (**self).category_of(id)
    }
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (finder-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate with structured output (if supported)
    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error>;

    /// Run the prompt and return every event the agent emitted, oldest first
    ///
    /// Providers without a notion of intermediate events return the single
    /// completion as one model event.
    fn generate_events(
        &self,
        prompt: &str,
        schema: Option<&str>,
    ) -> Result<Vec<AgentEvent>, Self::Error> {
        let text = match schema {
            Some(schema) => self.generate_structured(prompt, schema)?,
            None => self.generate(prompt)?,
        };
        Ok(vec![AgentEvent::model(text)])
    }
}

/// In-memory catalog, mainly for tests and examples
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
    categories: HashMap<ProductId, CategoryLabel>,
}

impl StaticCatalog {
    /// Create a catalog with no category assignments
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            categories: HashMap::new(),
        }
    }

    /// Assign a category to a product id
    pub fn with_category(mut self, id: ProductId, category: &str) -> Self {
        self.categories.insert(id, CategoryLabel::parse(category));
        self
    }
}

impl ProductCatalog for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn category_of(&self, id: ProductId) -> Option<&CategoryLabel> {
        self.categories.get(&id)
    }
}
