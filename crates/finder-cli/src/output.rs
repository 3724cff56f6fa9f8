//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use finder_domain::{synonyms_of, PriceBound, ResultItem, StructuredFilter};
use finder_interpreter::{InterpretOutcome, Interpretation};
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Columns, object::Rows, Alignment, Modify, Style},
};

/// Shown instead of an empty result list.
pub const EMPTY_RESULTS: &str = "No products match these filters.";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Empty-state message for stderr when quiet output printed nothing.
    ///
    /// Other formats carry the message (or an empty JSON list) on stdout.
    pub fn quiet_empty_notice(&self, items: &[ResultItem]) -> Option<&'static str> {
        (self.format == OutputFormat::Quiet && items.is_empty()).then_some(EMPTY_RESULTS)
    }

    /// Format a result list.
    pub fn format_results(&self, items: &[ResultItem]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&results_json(items))?),
            OutputFormat::Table => Ok(self.format_results_table(items)),
            OutputFormat::Cards => Ok(self.format_results_cards(items)),
            OutputFormat::Quiet => Ok(format_results_quiet(items)),
        }
    }

    /// Format an interpreted search: the filter that was used, then results.
    pub fn format_search(&self, interpretation: &Interpretation, items: &[ResultItem]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let reason = match &interpretation.outcome {
                    InterpretOutcome::Sanitized => Value::Null,
                    InterpretOutcome::FallbackDefault(e) => Value::String(e.to_string()),
                };
                let value = json!({
                    "filter": filter_json(&interpretation.filter),
                    "fallback": interpretation.outcome.is_fallback(),
                    "fallback_reason": reason,
                    "results": results_json(items),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(format_results_quiet(items)),
            OutputFormat::Table | OutputFormat::Cards => {
                let mut out = String::new();
                if let InterpretOutcome::FallbackDefault(e) = &interpretation.outcome {
                    out.push_str(&self.warning(&format!("Could not interpret the request ({}), showing everything", e)));
                    out.push('\n');
                }
                out.push_str(&self.info(&describe_filter(&interpretation.filter)));
                out.push_str("\n\n");
                out.push_str(&self.format_results(items)?);
                Ok(out)
            }
        }
    }

    /// Format the category vocabulary.
    pub fn format_categories<'a>(&self, labels: impl IntoIterator<Item = &'a str>) -> Result<String> {
        let labels: Vec<&str> = labels.into_iter().collect();
        match self.format {
            OutputFormat::Json => {
                let value: Vec<Value> = labels
                    .iter()
                    .map(|label| json!({ "label": label, "synonyms": synonyms_of(label) }))
                    .collect();
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(labels.join("\n")),
            OutputFormat::Table | OutputFormat::Cards => {
                let mut builder = Builder::default();
                builder.push_record(["Category", "Synonyms"]);
                for label in &labels {
                    builder.push_record([label.to_string(), synonyms_of(label).join(", ")]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    fn format_results_table(&self, items: &[ResultItem]) -> String {
        if items.is_empty() {
            return self.colorize(EMPTY_RESULTS, "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Category", "Price", "Description"]);

        for item in items {
            builder.push_record([
                item.id.to_string(),
                item.name.clone(),
                item.category_or_unknown().to_string(),
                format_price(item.price),
                truncate(&item.description, 48),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Columns::single(3)).with(Alignment::right()));

        table.to_string()
    }

    fn format_results_cards(&self, items: &[ResultItem]) -> String {
        if items.is_empty() {
            return self.colorize(EMPTY_RESULTS, "yellow");
        }

        items
            .iter()
            .map(|item| {
                let title = if self.color_enabled {
                    item.name.bold().to_string()
                } else {
                    item.name.clone()
                };
                format!(
                    "{}  {}\n  {}\n  category: {}\n  image: {}",
                    title,
                    self.colorize(&format_price(item.price), "green"),
                    item.description,
                    item.category_or_unknown(),
                    item.image,
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// One-line summary of a filter, e.g. `Filter: category: clothing, max: $50.00`.
pub fn describe_filter(filter: &StructuredFilter) -> String {
    if filter.is_unfiltered() {
        return "Filter: none".to_string();
    }

    let mut parts = Vec::new();
    if let Some(category) = &filter.category {
        parts.push(format!("category: {}", category));
    }
    if let Some(min) = &filter.min_price {
        parts.push(format!("min: {}", describe_bound(min)));
    }
    if let Some(max) = &filter.max_price {
        parts.push(format!("max: {}", describe_bound(max)));
    }
    format!("Filter: {}", parts.join(", "))
}

fn describe_bound(bound: &PriceBound) -> String {
    match bound.amount() {
        Some(amount) => format_price(amount),
        None => bound.to_string(),
    }
}

fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}

fn filter_json(filter: &StructuredFilter) -> Value {
    json!({
        "category": filter.category,
        "max_price": filter.max_price.as_ref().map(bound_json),
        "min_price": filter.min_price.as_ref().map(bound_json),
    })
}

fn bound_json(bound: &PriceBound) -> Value {
    match bound {
        PriceBound::Amount(amount) => json!(amount),
        PriceBound::Unrecognized(raw) => json!({ "unrecognized": raw }),
    }
}

fn results_json(items: &[ResultItem]) -> Value {
    items
        .iter()
        .map(|item| {
            json!({
                "id": item.id.value(),
                "name": item.name,
                "description": item.description,
                "price": item.price,
                "image": item.image,
                "category": item.category.as_ref().map(|c| c.as_str()),
            })
        })
        .collect()
}

fn format_results_quiet(items: &[ResultItem]) -> String {
    let ids: Vec<String> = items.iter().map(|item| item.id.to_string()).collect();
    ids.join("\n")
}
