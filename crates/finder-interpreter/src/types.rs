//! Types for interpretation requests and results

use crate::error::InterpreterError;
use finder_domain::StructuredFilter;
use std::fmt;

/// Lifecycle of a single interpretation call
///
/// `Idle → AwaitingAgent → ParsingResponse → {Sanitized, FallbackDefault}`.
/// Any non-terminal state may also jump straight to `FallbackDefault`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpretState {
    /// Call accepted, agent not yet invoked
    Idle,
    /// Waiting for the agent's event stream
    AwaitingAgent,
    /// Parsing the final payload
    ParsingResponse,
    /// A filter was parsed and sanitized
    Sanitized,
    /// The fail-open default filter was produced
    FallbackDefault,
}

impl InterpretState {
    /// Whether the state ends the call
    pub fn is_terminal(&self) -> bool {
        matches!(self, InterpretState::Sanitized | InterpretState::FallbackDefault)
    }

    /// Whether moving to `next` is a legal transition
    pub fn can_transition_to(&self, next: InterpretState) -> bool {
        use InterpretState::*;
        match (self, next) {
            (Idle, AwaitingAgent) | (AwaitingAgent, ParsingResponse) | (ParsingResponse, Sanitized) => true,
            (from, FallbackDefault) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for InterpretState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InterpretState::Idle => "idle",
            InterpretState::AwaitingAgent => "awaiting-agent",
            InterpretState::ParsingResponse => "parsing-response",
            InterpretState::Sanitized => "sanitized",
            InterpretState::FallbackDefault => "fallback-default",
        };
        f.write_str(name)
    }
}

/// How an interpretation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretOutcome {
    /// The agent's answer was parsed into the filter
    Sanitized,
    /// The unfiltered default was used for the given reason
    FallbackDefault(InterpreterError),
}

impl InterpretOutcome {
    /// Whether the fail-open default was used
    pub fn is_fallback(&self) -> bool {
        matches!(self, InterpretOutcome::FallbackDefault(_))
    }

    /// Terminal state matching this outcome
    pub fn state(&self) -> InterpretState {
        match self {
            InterpretOutcome::Sanitized => InterpretState::Sanitized,
            InterpretOutcome::FallbackDefault(_) => InterpretState::FallbackDefault,
        }
    }
}

/// Result of interpreting one query
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    /// The filter to apply; always present
    pub filter: StructuredFilter,

    /// How the filter was obtained
    pub outcome: InterpretOutcome,

    /// Final text payload selected from the agent's events (empty if the
    /// agent was never reached or produced no text)
    pub payload: String,

    /// Wall-clock time spent (milliseconds)
    pub elapsed_ms: u64,
}
