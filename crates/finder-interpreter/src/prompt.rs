//! LLM prompt for filter interpretation

use finder_domain::canonical_labels;

/// JSON schema for the agent's answer
pub const FILTER_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "category": { "type": ["string", "null"] },
    "max_price": { "type": ["number", "null"] },
    "min_price": { "type": ["number", "null"] }
  },
  "required": ["category", "max_price", "min_price"],
  "additionalProperties": false
}"#;

const INSTRUCTION: &str = r#"You convert shopping requests into a product filter.

Read the request and answer with ONE JSON object that has exactly these keys:
- "category": a short lowercase category keyword, or null when the request names none
- "max_price": a number when the request sets an upper limit ("under $50", "at most 20"), otherwise null
- "min_price": a number when the request sets a lower limit ("over 100", "at least 20"), otherwise null

Rules:
- Do not name, describe or invent products.
- Do not add keys or explanation text.
- Do not wrap the JSON in Markdown fences."#;

const EXAMPLES: &[(&str, &str)] = &[
    (
        "show me all your clothing products",
        r#"{"category": "clothing", "max_price": null, "min_price": null}"#,
    ),
    (
        "what clothing items are available under $50",
        r#"{"category": "clothing", "max_price": 50, "min_price": null}"#,
    ),
    (
        "list products over 1000 dollars",
        r#"{"category": null, "max_price": null, "min_price": 1000}"#,
    ),
];

/// Builds the prompt sent to the agent for one query
pub struct PromptBuilder {
    query: String,
    categories: Vec<String>,
}

impl PromptBuilder {
    /// Create a prompt builder listing the canonical categories
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            categories: canonical_labels().map(str::to_string).collect(),
        }
    }

    /// Replace the category keywords offered to the agent
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::from(INSTRUCTION);

        if !self.categories.is_empty() {
            prompt.push_str("\n\nKnown categories: ");
            prompt.push_str(&self.categories.join(", "));
        }

        prompt.push_str("\n\nExamples:\n");
        for (request, answer) in EXAMPLES {
            prompt.push_str(&format!("\nUser: \"{}\"\nYou: {}\n", request, answer));
        }

        prompt.push_str(&format!("\nUser: \"{}\"\nYou:", self.query));
        prompt
    }
}
