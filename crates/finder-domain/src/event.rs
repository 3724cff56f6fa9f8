//! Agent events and final-payload selection

/// One event emitted by an agent run
///
/// An agent run may emit several events (tool chatter, partial replies,
/// the final answer). Only the text carried by events matters to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentEvent {
    /// Who emitted the event (`model`, `tool`, ...)
    pub author: String,

    /// Text payload, if the event carried any
    pub text: Option<String>,
}

impl AgentEvent {
    /// An event authored by the model
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            author: "model".to_string(),
            text: Some(text.into()),
        }
    }

    /// An event with no text payload
    pub fn silent(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: None,
        }
    }
}

/// Select the final textual payload of an agent run
///
/// Scans from the most recent event backward and returns the first non-empty
/// text, trimmed. Returns an empty string when no event carries text.
///
/// # Examples
///
/// ```
/// use finder_domain::{final_text, AgentEvent};
///
/// let events = vec![
///     AgentEvent::model("thinking..."),
///     AgentEvent::model("  {\"category\": null}  "),
///     AgentEvent::silent("tool"),
/// ];
/// assert_eq!(final_text(&events), "{\"category\": null}");
/// assert_eq!(final_text(&[]), "");
/// ```
pub fn final_text(events: &[AgentEvent]) -> String {
    events
        .iter()
        .rev()
        .filter_map(|event| event.text.as_deref())
        .find(|text| !text.is_empty())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
