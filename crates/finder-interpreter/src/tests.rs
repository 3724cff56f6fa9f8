//! Integration tests for the interpreter

#[cfg(test)]
mod tests {
    use crate::{FilterInterpreter, InterpretOutcome, InterpreterConfig, InterpreterError};
    use finder_domain::{apply, AgentEvent, PriceBound, StructuredFilter};
    use finder_llm::MockProvider;
    use finder_store::Catalog;

    fn names(filter: &StructuredFilter) -> Vec<String> {
        let catalog = Catalog::bundled().unwrap();
        apply(filter, &catalog).into_iter().map(|i| i.name).collect()
    }

    #[tokio::test]
    async fn test_query_to_results() {
        let mut llm = MockProvider::new("not json");
        llm.add_response(
            "clothing under $50",
            r#"{"category": "clothing", "max_price": 50, "min_price": null}"#,
        );
        llm.add_response(
            "above 1000 bucks",
            r#"{"category": null, "max_price": null, "min_price": 1000}"#,
        );

        let interpreter = FilterInterpreter::new(llm, InterpreterConfig::default());

        let cheap_clothes = interpreter.interpret_filter("clothing under $50").await;
        assert_eq!(names(&cheap_clothes), vec!["T-Shirt", "UBC Hoodie"]);

        let expensive = interpreter.interpret_filter("anything above 1000 bucks").await;
        assert_eq!(names(&expensive), vec!["MacBook Air"]);
    }

    #[tokio::test]
    async fn test_unparsable_payload_shows_whole_catalog() {
        let interpreter = FilterInterpreter::new(
            MockProvider::new("not json"),
            InterpreterConfig::default(),
        );

        let result = interpreter.interpret("something vague").await;
        assert_eq!(result.filter, StructuredFilter::unfiltered());

        let all = names(&result.filter);
        assert_eq!(all.len(), 13);
        assert_eq!(all.first().map(String::as_str), Some("Whole Wheat Bread"));
        assert_eq!(all.last().map(String::as_str), Some("MacBook Air"));
    }

    #[tokio::test]
    async fn test_synonym_category_from_agent() {
        let interpreter = FilterInterpreter::new(
            MockProvider::new(r#"{"category": "Apparel", "max_price": null, "min_price": null}"#),
            InterpreterConfig::default(),
        );
        let apparel = interpreter.interpret_filter("apparel please").await;
        let clothing = StructuredFilter::default().with_category("clothing");
        assert_eq!(names(&apparel), names(&clothing));
    }

    #[tokio::test]
    async fn test_blank_min_price_is_absent() {
        let interpreter = FilterInterpreter::new(
            MockProvider::new(r#"{"category": "food", "max_price": 4, "min_price": "  "}"#),
            InterpreterConfig::default(),
        );
        let result = interpreter.interpret("food under 4").await;

        assert_eq!(result.outcome, InterpretOutcome::Sanitized);
        assert_eq!(result.filter.min_price, None);
        assert_eq!(names(&result.filter), vec!["Whole Wheat Bread", "Almond Milk"]);
    }

    #[tokio::test]
    async fn test_wrong_shaped_bounds_do_not_crash_engine() {
        let interpreter = FilterInterpreter::new(
            MockProvider::new(r#"{"category": "tech", "max_price": ["50"], "min_price": false}"#),
            InterpreterConfig::default(),
        );
        let result = interpreter.interpret("tech stuff").await;

        assert!(matches!(result.filter.max_price, Some(PriceBound::Unrecognized(_))));
        assert_eq!(
            names(&result.filter),
            vec!["USB-C Hub", "Bluetooth Headphones", "Smartwatch", "MacBook Air"]
        );
    }

    #[tokio::test]
    async fn test_string_price_leaves_range_open() {
        let interpreter = FilterInterpreter::new(
            MockProvider::new(r#"{"category": null, "max_price": "50", "min_price": null}"#),
            InterpreterConfig::default(),
        );
        let result = interpreter.interpret("under fifty").await;

        assert_eq!(result.outcome, InterpretOutcome::Sanitized);
        assert_eq!(names(&result.filter).len(), 13);
    }

    #[tokio::test]
    async fn test_final_event_is_used() {
        let llm = MockProvider::with_events(vec![
            AgentEvent::model(r#"{"category": "clothing"}"#),
            AgentEvent::model(r#"{"category": "accessories"}"#),
            AgentEvent::silent("tool"),
            AgentEvent::model(""),
        ]);
        let interpreter = FilterInterpreter::new(llm, InterpreterConfig::default());

        let result = interpreter.interpret("bags").await;
        assert_eq!(result.payload, r#"{"category": "accessories"}"#);
        assert_eq!(names(&result.filter), vec!["Backpack"]);
    }

    #[tokio::test]
    async fn test_no_text_events_fall_back() {
        let llm = MockProvider::with_events(vec![AgentEvent::silent("tool")]);
        let interpreter = FilterInterpreter::new(llm, InterpreterConfig::default());

        let result = interpreter.interpret("anything").await;
        assert_eq!(
            result.outcome,
            InterpretOutcome::FallbackDefault(InterpreterError::EmptyPayload)
        );
        assert!(result.payload.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_queries_are_deterministic_downstream() {
        let interpreter = FilterInterpreter::new(
            MockProvider::new(r#"{"category": null, "max_price": 80, "min_price": 20}"#),
            InterpreterConfig::default(),
        );

        let first = names(&interpreter.interpret_filter("mid range").await);
        let second = names(&interpreter.interpret_filter("mid range").await);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec!["USB-C Hub", "UBC Hoodie", "Backpack", "Denim Jacket", "Running Shoes"]
        );
    }
}
