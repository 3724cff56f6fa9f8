//! Configuration for the interpreter

use crate::error::InterpreterError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the interpreter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Maximum time to wait for the agent (seconds); the fail-open filter is
    /// used when it elapses
    pub timeout_secs: u64,

    /// Maximum accepted query length (characters)
    pub max_query_length: usize,

    /// Ask the provider for schema-constrained output
    pub structured_output: bool,
}

impl InterpreterConfig {
    /// Get the timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), InterpreterError> {
        if self.timeout_secs == 0 {
            return Err(InterpreterError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.max_query_length == 0 {
            return Err(InterpreterError::Config(
                "max_query_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Fast preset: short timeout, short queries
    pub fn fast() -> Self {
        Self {
            timeout_secs: 10,
            max_query_length: 200,
            structured_output: true,
        }
    }

    /// Patient preset: for slow local models
    pub fn patient() -> Self {
        Self {
            timeout_secs: 180,
            max_query_length: 2_000,
            structured_output: true,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, InterpreterError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| InterpreterError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, InterpreterError> {
        toml::to_string_pretty(self)
            .map_err(|e| InterpreterError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            max_query_length: 500,
            structured_output: true,
        }
    }
}
