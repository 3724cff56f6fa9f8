//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Finder CLI - Search a product catalog in plain language.
#[derive(Debug, Parser)]
#[command(name = "finder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Product catalog (JSON) to search instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Ollama endpoint override
    #[arg(long, env = "FINDER_OLLAMA_URL", global = true)]
    pub ollama_url: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// One block per product
    Cards,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Describe what you want in plain language
    Search(SearchArgs),

    /// Apply a filter directly, without the agent
    Filter(FilterArgs),

    /// List the recognized categories and their synonyms
    Categories,

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search query text
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

impl SearchArgs {
    /// The query words joined back into one request
    pub fn text(&self) -> String {
        self.query.join(" ")
    }
}

/// Arguments for the filter command.
#[derive(Debug, Default, Parser)]
pub struct FilterArgs {
    /// Category or synonym (e.g. clothing, tech, food)
    #[arg(long)]
    pub category: Option<String>,

    /// Inclusive lower price bound
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Inclusive upper price bound
    #[arg(long)]
    pub max_price: Option<f64>,
}

/// Arguments for config management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Cards => crate::config::OutputFormat::Cards,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
