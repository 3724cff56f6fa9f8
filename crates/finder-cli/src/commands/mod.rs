//! Command implementations.

pub mod categories;
pub mod config;
pub mod filter;
pub mod search;

pub use self::categories::execute_categories;
pub use self::config::execute_config;
pub use self::filter::execute_filter;
pub use self::search::execute_search;
