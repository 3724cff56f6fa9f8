//! Finder LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `finder-domain`, used by the
//! interpreter to turn free-text product requests into filters.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing, with scripted event streams
//! - `OllamaProvider`: Local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use finder_llm::MockProvider;
//! use finder_domain::LlmProvider;
//!
//! let provider = MockProvider::new(r#"{"category": "clothing"}"#);
//! let result = provider.generate("show me clothes").unwrap();
//! assert_eq!(result, r#"{"category": "clothing"}"#);
//! ```

#![warn(missing_docs)]

pub mod ollama;

use finder_domain::{AgentEvent, LlmProvider as LlmProviderTrait};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;

pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// A scripted reply
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Events(Vec<AgentEvent>),
    Error,
}

#[derive(Debug, Default)]
struct MockState {
    rules: Vec<(String, MockReply)>,
    call_count: usize,
    last_prompt: Option<String>,
    last_schema: Option<String>,
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured replies without making any network calls. A reply
/// registered for a fragment is used for every request that contains that
/// fragment; the first matching rule wins, and requests matching no rule get
/// the default reply.
///
/// Fragments are matched against the user's request only: the text after the
/// last `User: "` marker of the prompt, or the whole prompt when there is no
/// marker. Instruction text and few-shot examples never trigger a rule.
///
/// # Examples
///
/// ```
/// use finder_llm::MockProvider;
/// use finder_domain::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Responses keyed by prompt fragment
/// let mut provider = MockProvider::default();
/// provider.add_response("under $50", r#"{"max_price": 50}"#);
/// provider.add_response("laptops", r#"{"category": "electronics"}"#);
/// assert_eq!(provider.generate("clothes under $50").unwrap(), r#"{"max_price": 50}"#);
/// assert_eq!(provider.generate("cheap laptops").unwrap(), r#"{"category": "electronics"}"#);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: MockReply,
    state: Arc<Mutex<MockState>>,
    delay: Option<Duration>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_reply: MockReply::Text(response.into()),
            state: Arc::new(Mutex::new(MockState::default())),
            delay: None,
        }
    }

    /// Create a MockProvider whose default reply is a full event stream
    pub fn with_events(events: Vec<AgentEvent>) -> Self {
        Self {
            default_reply: MockReply::Events(events),
            ..Self::new("")
        }
    }

    /// Create a MockProvider that fails every call
    pub fn failing() -> Self {
        Self {
            default_reply: MockReply::Error,
            ..Self::new("")
        }
    }

    /// Sleep for `delay` before answering, to simulate a slow model
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Add a response for prompts containing `fragment`
    pub fn add_response(&mut self, fragment: impl Into<String>, response: impl Into<String>) {
        self.state()
            .rules
            .push((fragment.into(), MockReply::Text(response.into())));
    }

    /// Add an event stream for prompts containing `fragment`
    pub fn add_events(&mut self, fragment: impl Into<String>, events: Vec<AgentEvent>) {
        self.state()
            .rules
            .push((fragment.into(), MockReply::Events(events)));
    }

    /// Configure to return an error for prompts containing `fragment`
    pub fn add_error(&mut self, fragment: impl Into<String>) {
        self.state().rules.push((fragment.into(), MockReply::Error));
    }

    /// Get the number of times the provider was called
    pub fn call_count(&self) -> usize {
        self.state().call_count
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.state().call_count = 0;
    }

    /// The most recent prompt received
    pub fn last_prompt(&self) -> Option<String> {
        self.state().last_prompt.clone()
    }

    /// The schema passed with the most recent structured call
    pub fn last_schema(&self) -> Option<String> {
        self.state().last_schema.clone()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn reply_for(&self, prompt: &str, schema: Option<&str>) -> MockReply {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        let mut state = self.state();
        state.call_count += 1;
        state.last_prompt = Some(prompt.to_string());
        state.last_schema = schema.map(str::to_string);

        let request = request_segment(prompt);
        state
            .rules
            .iter()
            .find(|(fragment, _)| request.contains(fragment.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| self.default_reply.clone())
    }
}

/// The part of a prompt that carries the user's request
fn request_segment(prompt: &str) -> &str {
    prompt
        .rsplit_once(REQUEST_MARKER)
        .map(|(_, request)| request)
        .unwrap_or(prompt)
}

const REQUEST_MARKER: &str = "User: \"";

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        match self.reply_for(prompt, None) {
            MockReply::Text(text) => Ok(text),
            MockReply::Events(events) => Ok(finder_domain::final_text(&events)),
            MockReply::Error => Err(LlmError::Other("Mock error".to_string())),
        }
    }

    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error> {
        match self.reply_for(prompt, Some(schema)) {
            MockReply::Text(text) => Ok(text),
            MockReply::Events(events) => Ok(finder_domain::final_text(&events)),
            MockReply::Error => Err(LlmError::Other("Mock error".to_string())),
        }
    }

    fn generate_events(
        &self,
        prompt: &str,
        schema: Option<&str>,
    ) -> Result<Vec<AgentEvent>, Self::Error> {
        match self.reply_for(prompt, schema) {
            MockReply::Text(text) => Ok(vec![AgentEvent::model(text)]),
            MockReply::Events(events) => Ok(events),
            MockReply::Error => Err(LlmError::Other("Mock error".to_string())),
        }
    }
}
