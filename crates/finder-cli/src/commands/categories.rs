//! Categories command implementation.

use crate::error::Result;
use crate::output::Formatter;
use finder_domain::canonical_labels;

/// Execute the categories command.
pub fn execute_categories(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_categories(canonical_labels())?);
    Ok(())
}
