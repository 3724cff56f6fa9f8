//! Parse agent payloads into structured filters

use crate::error::InterpreterError;
use finder_domain::{PriceBound, StructuredFilter};
use serde_json::{Map, Value};
use tracing::warn;

/// Parse the agent's final payload into a filter
///
/// The payload must be a JSON object (optionally inside a Markdown code
/// block). Missing keys and `null` values are absent; unknown keys are
/// ignored. Field values are sanitized by [`sanitize_price`] and
/// [`sanitize_category`].
///
/// # Errors
/// Returns error if the payload is empty, not JSON, or not an object.
pub fn parse_filter(payload: &str) -> Result<StructuredFilter, InterpreterError> {
    let json_str = extract_json(payload)?;
    if json_str.is_empty() {
        return Err(InterpreterError::EmptyPayload);
    }

    let json: Value = serde_json::from_str(&json_str)?;

    let obj = json
        .as_object()
        .ok_or_else(|| InterpreterError::InvalidFormat("Expected JSON object".to_string()))?;

    Ok(StructuredFilter {
        category: sanitize_category(field(obj, "category")),
        max_price: sanitize_price(field(obj, "max_price")),
        min_price: sanitize_price(field(obj, "min_price")),
    })
}

fn field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

/// Sanitize a price value
///
/// - numbers become amounts
/// - whitespace-only strings become absent
/// - anything else, including strings that look numeric, is kept as an
///   unrecognized bound, which the engine ignores
pub fn sanitize_price(value: Option<&Value>) -> Option<PriceBound> {
    let value = value?;
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(amount) => Some(PriceBound::Amount(amount)),
            None => Some(PriceBound::Unrecognized(n.to_string())),
        },
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(PriceBound::Unrecognized(s.clone())),
        other => {
            warn!("Ignoring price bound of unexpected shape: {}", other);
            Some(PriceBound::Unrecognized(other.to_string()))
        }
    }
}

/// Sanitize a category value
///
/// Strings are kept as they are (normalization happens in the engine); any
/// other shape is treated as absent.
pub fn sanitize_category(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        other => {
            warn!("Ignoring category of unexpected shape: {}", other);
            None
        }
    }
}

/// Extract JSON from a payload, handling Markdown code blocks
fn extract_json(payload: &str) -> Result<String, InterpreterError> {
    let trimmed = payload.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(InterpreterError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip the opening fence line and a closing fence if present
        let end = if lines[lines.len() - 1].trim_start().starts_with("```") {
            lines.len() - 1
        } else {
            lines.len()
        };
        Ok(lines[1..end].join("\n").trim().to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
