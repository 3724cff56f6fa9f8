//! Error types for the interpreter
//!
//! None of these escape [`FilterInterpreter::interpret`](crate::FilterInterpreter::interpret):
//! each one is converted into the fail-open default filter and reported as
//! the reason in [`InterpretOutcome::FallbackDefault`](crate::InterpretOutcome::FallbackDefault).

use thiserror::Error;

/// Reasons an interpretation falls back to the unfiltered default
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpreterError {
    /// Query was empty after trimming
    #[error("Query is empty")]
    EmptyQuery,

    /// Query exceeds the configured maximum length
    #[error("Query too long: {0} chars (max: {1})")]
    QueryTooLong(usize, usize),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Agent did not answer in time
    #[error("Interpretation timeout")]
    Timeout,

    /// Agent produced no text at all
    #[error("Agent returned no text")]
    EmptyPayload,

    /// Payload is JSON but not an object
    #[error("Invalid filter format: {0}")]
    InvalidFormat(String),

    /// Payload is not JSON
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for InterpreterError {
    fn from(e: serde_json::Error) -> Self {
        InterpreterError::JsonParse(e.to_string())
    }
}
