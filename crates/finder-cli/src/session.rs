//! Loaded catalog plus interpreter, shared by all commands.

use crate::config::Config;
use crate::error::Result;
use crate::provider::Provider;
use finder_domain::{apply, ResultItem, StructuredFilter};
use finder_interpreter::{FilterInterpreter, Interpretation};
use finder_store::{Catalog, CategoryAssignment};
use std::sync::Arc;
use tracing::info;

/// Everything a command needs to answer queries
pub struct Session {
    catalog: Arc<Catalog>,
    interpreter: FilterInterpreter<Provider>,
    provider_name: &'static str,
}

impl Session {
    /// Load the configured catalog and build the configured provider.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = load_catalog(config)?;
        info!("Catalog ready with {} products", catalog.len());
        Ok(Self::new(Arc::new(catalog), Provider::from_settings(&config.llm), config))
    }

    /// Assemble a session from parts.
    pub fn new(catalog: Arc<Catalog>, provider: Provider, config: &Config) -> Self {
        let provider_name = provider.name();
        Self {
            catalog,
            interpreter: FilterInterpreter::new(provider, config.interpreter.clone()),
            provider_name,
        }
    }

    /// The loaded catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Name of the active provider
    pub fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    /// Interpret a query and apply the resulting filter.
    pub async fn search(&self, query: &str) -> (Interpretation, Vec<ResultItem>) {
        let interpretation = self.interpreter.interpret(query).await;
        let results = self.filter(&interpretation.filter);
        (interpretation, results)
    }

    /// Apply a filter to the catalog.
    pub fn filter(&self, filter: &StructuredFilter) -> Vec<ResultItem> {
        apply(filter, self.catalog.as_ref())
    }
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    let sources = &config.catalog;
    let catalog = match &sources.products_path {
        Some(products) => Catalog::load(products, sources.categories_path.as_deref())?,
        None => {
            let bundled = Catalog::bundled()?;
            match &sources.categories_path {
                Some(categories) => bundled.with_assignments(CategoryAssignment::load_toml(categories)?),
                None => bundled,
            }
        }
    };
    Ok(catalog)
}
