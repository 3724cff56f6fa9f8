//! Filter command implementation.

use crate::cli::FilterArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use finder_domain::StructuredFilter;

/// Execute the filter command.
pub fn execute_filter(args: FilterArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let filter = build_filter(args)?;
    let results = session.filter(&filter);
    println!("{}", formatter.format_results(&results)?);
    if let Some(notice) = formatter.quiet_empty_notice(&results) {
        eprintln!("{}", notice);
    }
    Ok(())
}

/// Turn flags into a filter, rejecting bounds that are not finite.
pub fn build_filter(args: FilterArgs) -> Result<StructuredFilter> {
    let mut filter = StructuredFilter::unfiltered();

    if let Some(category) = args.category {
        filter = filter.with_category(category);
    }

    if let Some(min) = args.min_price {
        check_bound("--min-price", min)?;
        filter = filter.with_min_price(min);
    }

    if let Some(max) = args.max_price {
        check_bound("--max-price", max)?;
        filter = filter.with_max_price(max);
    }

    Ok(filter)
}

fn check_bound(flag: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CliError::InvalidInput(format!("{} must be a number", flag)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        let filter = build_filter(FilterArgs {
            category: Some("Apparel".to_string()),
            min_price: None,
            max_price: Some(50.0),
        })
        .unwrap();
        assert_eq!(filter.category.as_deref(), Some("Apparel"));
        assert_eq!(filter.max_amount(), Some(50.0));
        assert_eq!(filter.min_price, None);
    }

    #[test]
    fn test_empty_args_are_unfiltered() {
        assert!(build_filter(FilterArgs::default()).unwrap().is_unfiltered());
    }

    #[test]
    fn test_rejects_nan() {
        let result = build_filter(FilterArgs {
            min_price: Some(f64::NAN),
            ..Default::default()
        });
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
