//! Finder CLI library.
//!
//! Configuration, provider selection, output formatting and the command
//! implementations behind the `finder` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod provider;
pub mod repl;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use provider::Provider;
pub use session::Session;
