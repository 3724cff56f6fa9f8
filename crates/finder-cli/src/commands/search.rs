//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use tracing::debug;

/// Execute the search command.
pub async fn execute_search(args: SearchArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let query = args.text();
    debug!("Searching via {}: {}", session.provider_name(), query);

    let (interpretation, results) = session.search(&query).await;
    println!("{}", formatter.format_search(&interpretation, &results)?);
    if let Some(notice) = formatter.quiet_empty_notice(&results) {
        eprintln!("{}", notice);
    }

    Ok(())
}
