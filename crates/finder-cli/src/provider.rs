//! Provider selected by configuration.

use crate::config::{LlmSettings, ProviderKind};
use finder_domain::{AgentEvent, LlmProvider};
use finder_llm::{LlmError, MockProvider, OllamaProvider};
use tracing::debug;

/// The provider chosen at startup
#[derive(Debug, Clone)]
pub enum Provider {
    /// Local Ollama server
    Ollama(OllamaProvider),
    /// Canned reply
    Mock(MockProvider),
}

impl Provider {
    /// Build the provider described by the `[llm]` section.
    pub fn from_settings(settings: &LlmSettings) -> Self {
        match settings.provider {
            ProviderKind::Ollama => {
                debug!("Using Ollama at {} with model {}", settings.endpoint, settings.model);
                Provider::Ollama(
                    OllamaProvider::new(&settings.endpoint, &settings.model)
                        .with_max_retries(settings.max_retries),
                )
            }
            ProviderKind::Mock => {
                debug!("Using mock provider");
                Provider::Mock(MockProvider::new(&settings.mock_response))
            }
        }
    }

    /// Short name for display
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Ollama(_) => "ollama",
            Provider::Mock(_) => "mock",
        }
    }
}

impl LlmProvider for Provider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        match self {
            Provider::Ollama(p) => LlmProvider::generate(p, prompt),
            Provider::Mock(p) => p.generate(prompt),
        }
    }

    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error> {
        match self {
            Provider::Ollama(p) => LlmProvider::generate_structured(p, prompt, schema),
            Provider::Mock(p) => p.generate_structured(prompt, schema),
        }
    }

    fn generate_events(
        &self,
        prompt: &str,
        schema: Option<&str>,
    ) -> Result<Vec<AgentEvent>, Self::Error> {
        match self {
            Provider::Ollama(p) => p.generate_events(prompt, schema),
            Provider::Mock(p) => p.generate_events(prompt, schema),
        }
    }
}
