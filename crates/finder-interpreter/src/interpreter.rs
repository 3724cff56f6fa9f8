//! Core interpreter implementation

use crate::config::InterpreterConfig;
use crate::error::InterpreterError;
use crate::parser::parse_filter;
use crate::prompt::{PromptBuilder, FILTER_SCHEMA};
use crate::types::{InterpretOutcome, InterpretState, Interpretation};
use finder_domain::{final_text, AgentEvent, LlmProvider, StructuredFilter};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Turns free-text product requests into structured filters
///
/// Interpretation never fails outward: every failure (empty or oversized
/// query, provider error, timeout, unparsable payload) yields the all-absent
/// filter, so the caller shows the unfiltered catalog.
pub struct FilterInterpreter<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: InterpreterConfig,
}

impl<L> FilterInterpreter<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new interpreter
    pub fn new(llm_provider: L, config: InterpreterConfig) -> Self {
        Self::from_arc(Arc::new(llm_provider), config)
    }

    /// Create an interpreter sharing an existing provider
    pub fn from_arc(llm_provider: Arc<L>, config: InterpreterConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Interpret a query
    ///
    /// Always returns an [`Interpretation`]; check its `outcome` to see
    /// whether the filter came from the agent or is the fail-open default.
    pub async fn interpret(&self, query: &str) -> Interpretation {
        let started = Instant::now();
        let mut state = InterpretState::Idle;
        let mut payload = String::new();

        let (filter, outcome) = match self.run(query, &mut state, &mut payload).await {
            Ok(filter) => {
                advance(&mut state, InterpretState::Sanitized);
                (filter, InterpretOutcome::Sanitized)
            }
            Err(e) => {
                warn!("Interpretation failed in state {}, showing unfiltered catalog: {}", state, e);
                advance(&mut state, InterpretState::FallbackDefault);
                (StructuredFilter::unfiltered(), InterpretOutcome::FallbackDefault(e))
            }
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!("Interpreted query in {}ms: {:?}", elapsed_ms, filter);

        Interpretation {
            filter,
            outcome,
            payload,
            elapsed_ms,
        }
    }

    /// Interpret a query, returning only the filter
    pub async fn interpret_filter(&self, query: &str) -> StructuredFilter {
        self.interpret(query).await.filter
    }

    /// Interpret from synchronous code
    ///
    /// Returns as soon as the interpretation finishes or times out. A provider
    /// call still running after a timeout is left to finish on its own thread.
    ///
    /// Must not be called from inside an async context.
    pub fn interpret_blocking(&self, query: &str) -> Interpretation {
        match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => {
                let interpretation = runtime.block_on(self.interpret(query));
                runtime.shutdown_background();
                interpretation
            }
            Err(e) => {
                warn!("Failed to start runtime for interpretation: {}", e);
                Interpretation {
                    filter: StructuredFilter::unfiltered(),
                    outcome: InterpretOutcome::FallbackDefault(InterpreterError::Llm(format!(
                        "runtime unavailable: {}",
                        e
                    ))),
                    payload: String::new(),
                    elapsed_ms: 0,
                }
            }
        }
    }

    async fn run(
        &self,
        query: &str,
        state: &mut InterpretState,
        payload: &mut String,
    ) -> Result<StructuredFilter, InterpreterError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(InterpreterError::EmptyQuery);
        }
        let length = query.chars().count();
        if length > self.config.max_query_length {
            return Err(InterpreterError::QueryTooLong(length, self.config.max_query_length));
        }

        let prompt = PromptBuilder::new(query).build();
        debug!("Prompt length: {} chars", prompt.len());

        advance(state, InterpretState::AwaitingAgent);
        let events = timeout(self.config.timeout(), self.call_llm(prompt))
            .await
            .map_err(|_| InterpreterError::Timeout)??;

        advance(state, InterpretState::ParsingResponse);
        debug!("Agent emitted {} events", events.len());
        *payload = final_text(&events);
        debug!("Final payload: {}", payload);

        parse_filter(payload.as_str())
    }

    /// Call the LLM provider
    async fn call_llm(&self, prompt: String) -> Result<Vec<AgentEvent>, InterpreterError> {
        let llm = Arc::clone(&self.llm_provider);
        let structured = self.config.structured_output;

        // Call in a blocking context since LlmProvider is not async
        tokio::task::spawn_blocking(move || {
            let schema = structured.then_some(FILTER_SCHEMA);
            llm.generate_events(&prompt, schema)
                .map_err(|e| InterpreterError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| InterpreterError::Llm(format!("Task join error: {}", e)))?
    }
}

fn advance(state: &mut InterpretState, next: InterpretState) {
    debug_assert!(state.can_transition_to(next), "illegal transition {} -> {}", state, next);
    debug!("Interpreter state: {} -> {}", state, next);
    *state = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_domain::PriceBound;
    use finder_llm::MockProvider;
    use std::time::Duration;

    fn interpreter(llm: MockProvider) -> FilterInterpreter<MockProvider> {
        FilterInterpreter::new(llm, InterpreterConfig::default())
    }

    #[tokio::test]
    async fn test_sanitized_filter() {
        let llm = MockProvider::new(r#"{"category": "clothing", "max_price": 50, "min_price": null}"#);
        let result = interpreter(llm).interpret("clothing under $50").await;

        assert_eq!(result.outcome, InterpretOutcome::Sanitized);
        assert_eq!(result.filter.category.as_deref(), Some("clothing"));
        assert_eq!(result.filter.max_price, Some(PriceBound::Amount(50.0)));
        assert!(result.payload.contains("clothing"));
    }

    #[tokio::test]
    async fn test_not_json_falls_back() {
        let result = interpreter(MockProvider::new("not json")).interpret("anything").await;
        assert!(result.filter.is_unfiltered());
        assert!(matches!(
            result.outcome,
            InterpretOutcome::FallbackDefault(InterpreterError::JsonParse(_))
        ));
        assert_eq!(result.payload, "not json");
    }

    #[tokio::test]
    async fn test_empty_query_skips_agent() {
        let llm = MockProvider::new("{}");
        let interp = interpreter(llm.clone());

        let result = interp.interpret("   ").await;
        assert_eq!(
            result.outcome,
            InterpretOutcome::FallbackDefault(InterpreterError::EmptyQuery)
        );
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_long_query_skips_agent() {
        let llm = MockProvider::new("{}");
        let config = InterpreterConfig {
            max_query_length: 10,
            ..Default::default()
        };
        let interp = FilterInterpreter::new(llm.clone(), config);

        let result = interp.interpret("show me everything you have").await;
        assert!(matches!(
            result.outcome,
            InterpretOutcome::FallbackDefault(InterpreterError::QueryTooLong(27, 10))
        ));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let result = interpreter(MockProvider::failing()).interpret("laptops").await;
        assert!(result.filter.is_unfiltered());
        assert!(matches!(
            result.outcome,
            InterpretOutcome::FallbackDefault(InterpreterError::Llm(_))
        ));
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let llm = MockProvider::new(r#"{"category": "food"}"#).with_delay(Duration::from_millis(1500));
        let config = InterpreterConfig {
            timeout_secs: 1,
            ..Default::default()
        };
        let started = Instant::now();
        let result = FilterInterpreter::new(llm, config).interpret("food").await;
        assert!(started.elapsed() < Duration::from_millis(1400));
        assert!(result.elapsed_ms < 1400);
        assert_eq!(
            result.outcome,
            InterpretOutcome::FallbackDefault(InterpreterError::Timeout)
        );
        assert!(result.filter.is_unfiltered());
    }

    #[test]
    fn test_blocking_timeout_returns_promptly() {
        let llm = MockProvider::new(r#"{"category": "food"}"#).with_delay(Duration::from_secs(4));
        let config = InterpreterConfig {
            timeout_secs: 1,
            ..Default::default()
        };
        let interp = FilterInterpreter::new(llm, config);

        let started = Instant::now();
        let result = interp.interpret_blocking("food");
        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(
            result.outcome,
            InterpretOutcome::FallbackDefault(InterpreterError::Timeout)
        );
    }

    #[tokio::test]
    async fn test_structured_output_sends_schema() {
        let llm = MockProvider::new("{}");
        interpreter(llm.clone()).interpret("bags").await;
        assert_eq!(llm.last_schema().as_deref(), Some(FILTER_SCHEMA));
        assert!(llm.last_prompt().unwrap().ends_with("User: \"bags\"\nYou:"));

        let config = InterpreterConfig {
            structured_output: false,
            ..Default::default()
        };
        FilterInterpreter::new(llm.clone(), config).interpret("bags").await;
        assert_eq!(llm.last_schema(), None);
    }

    #[test]
    fn test_interpret_blocking() {
        let llm = MockProvider::new(r#"{"min_price": 1000}"#);
        let result = interpreter(llm).interpret_blocking("over 1000 dollars");
        assert_eq!(result.filter.min_amount(), Some(1000.0));
        assert_eq!(result.outcome.state(), InterpretState::Sanitized);
    }
}
