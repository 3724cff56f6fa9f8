//! Finder Interpreter
//!
//! Converts free-text product requests into structured filters using an LLM.
//!
//! # Overview
//!
//! The interpreter is the adapter between users and the deterministic filter
//! engine. It prompts an agent, selects the final text the agent produced,
//! parses it into a [`StructuredFilter`](finder_domain::StructuredFilter) and
//! sanitizes the values. The agent is treated as unreliable: anything that
//! goes wrong produces the all-absent filter, so the user sees the whole
//! catalog rather than an error.
//!
//! # Architecture
//!
//! ```text
//! Query → Interpreter → LLM → events → final payload → StructuredFilter → Filter Engine
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use finder_interpreter::{FilterInterpreter, InterpreterConfig};
//! use finder_llm::MockProvider;
//!
//! # async fn example() {
//! let llm = MockProvider::new(r#"{"category": "clothing", "max_price": 50, "min_price": null}"#);
//! let interpreter = FilterInterpreter::new(llm, InterpreterConfig::default());
//!
//! let result = interpreter.interpret("clothing under $50").await;
//! println!("Filter: {:?} ({:?})", result.filter, result.outcome);
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod interpreter;
mod parser;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use config::InterpreterConfig;
pub use error::InterpreterError;
pub use interpreter::FilterInterpreter;
pub use parser::{parse_filter, sanitize_category, sanitize_price};
pub use prompt::{PromptBuilder, FILTER_SCHEMA};
pub use types::{InterpretOutcome, InterpretState, Interpretation};
