//! Ollama Provider Implementation
//!
//! Provides integration with Ollama's local LLM API.
//!
//! # Features
//!
//! - Async HTTP communication with Ollama API
//! - Configurable endpoint, model and request timeout
//! - Retry logic with exponential backoff
//! - Structured output through Ollama's JSON-schema `format` field
//!
//! # Examples
//!
//! ```no_run
//! use finder_llm::OllamaProvider;
//!
//! // Create an Ollama provider
//! let provider = OllamaProvider::new("http://localhost:11434", "llama3.2");
//!
//! // Note: The generate method is async, so you need to use it in an async context
//! // or use the LlmProvider trait's blocking wrapper
//! ```

use crate::LlmError;
use finder_domain::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Default timeout for LLM requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Ollama API provider for local LLM inference
///
/// This provider communicates with a local Ollama instance to generate text.
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
    timeout: Duration,
}

/// Request body for Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<serde_json::Value>,
}

/// Response from Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
    #[allow(dead_code)]
    done: bool,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "llama3.2", "mistral")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        let timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client: build_client(timeout),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout,
        }
    }

    /// Create a new Ollama provider with default settings
    ///
    /// Uses `http://localhost:11434` as endpoint and requires a model name.
    pub fn default_endpoint(model: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self.client = build_client(timeout);
        self
    }

    /// Model name used for requests
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text using Ollama API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not running
    /// - Model is not available
    /// - Network communication fails
    /// - Response format is invalid
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.request(prompt, None).await
    }

    /// Generate output constrained by a JSON schema
    ///
    /// `schema` is passed as Ollama's `format` field. A schema that is not
    /// valid JSON falls back to plain JSON mode.
    pub async fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, LlmError> {
        let format = serde_json::from_str(schema).unwrap_or_else(|e| {
            warn!("Schema is not valid JSON ({}), using plain JSON mode", e);
            serde_json::Value::String("json".to_string())
        });
        self.request(prompt, Some(format)).await
    }

    async fn request(
        &self,
        prompt: &str,
        format: Option<serde_json::Value>,
    ) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.endpoint);

        let request_body = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            format,
        };

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            debug!("Ollama request attempt {} to {}", attempts + 1, url);
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response
                            .json::<OllamaGenerateResponse>()
                            .await
                            .map(|r| r.response)
                            .map_err(|e| {
                                LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                            });
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
}

/// Drive a future to completion from synchronous code
///
/// Reuses the surrounding runtime when called from a blocking task, and
/// starts a private one otherwise.
fn block_on<F: Future>(future: F) -> Result<F::Output, LlmError> {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => Ok(handle.block_on(future)),
        Err(_) => tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map(|runtime| runtime.block_on(future))
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e))),
    }
}

impl LlmProviderTrait for OllamaProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        block_on(OllamaProvider::generate(self, prompt))?
    }

    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error> {
        block_on(OllamaProvider::generate_structured(self, prompt, schema))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_provider_creation() {
        let provider = OllamaProvider::new("http://localhost:11434/", "llama3.2");
        assert_eq!(provider.endpoint, "http://localhost:11434");
        assert_eq!(provider.model(), "llama3.2");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(provider.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_ollama_provider_default_endpoint() {
        let provider = OllamaProvider::default_endpoint("mistral");
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model, "mistral");
    }

    #[test]
    fn test_ollama_provider_builders() {
        let provider = OllamaProvider::new("http://localhost:11434", "llama3.2")
            .with_max_retries(5)
            .with_timeout(Duration::from_secs(3));
        assert_eq!(provider.max_retries, 5);
        assert_eq!(provider.timeout, Duration::from_secs(3));

        let provider = provider.with_max_retries(0);
        assert_eq!(provider.max_retries, 1);
    }

    #[test]
    fn test_request_body_format_field() {
        let plain = OllamaGenerateRequest {
            model: "m",
            prompt: "p",
            stream: false,
            format: None,
        };
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("format").is_none());

        let structured = OllamaGenerateRequest {
            format: Some(serde_json::json!({"type": "object"})),
            ..plain
        };
        let json = serde_json::to_value(&structured).unwrap();
        assert_eq!(json["format"]["type"], "object");
    }

    // Integration tests (requires running Ollama)
    #[tokio::test]
    #[ignore] // Only run when Ollama is available
    async fn test_ollama_generate_integration() {
        let provider = OllamaProvider::default_endpoint(DEFAULT_MODEL);
        let result = provider.generate("Say 'hello' and nothing else").await;

        if let Ok(response) = result {
            assert!(!response.is_empty());
        }
    }

    #[tokio::test]
    async fn test_ollama_error_handling() {
        // Port 9 (discard) is not an HTTP server
        let provider = OllamaProvider::new("http://127.0.0.1:9", "llama3.2")
            .with_max_retries(1)
            .with_timeout(Duration::from_secs(2));

        let result = provider.generate("test").await;

        match result {
            Err(LlmError::Communication(_)) => {} // Expected
            other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_blocking_wrapper_outside_runtime() {
        let provider = OllamaProvider::new("http://127.0.0.1:9", "llama3.2")
            .with_max_retries(1)
            .with_timeout(Duration::from_secs(2));

        let result = LlmProviderTrait::generate(&provider, "test");
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
