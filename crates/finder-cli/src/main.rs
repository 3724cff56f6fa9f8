//! Finder CLI - Natural-language search over a product catalog.

use clap::Parser;
use finder_cli::commands;
use finder_cli::repl;
use finder_cli::{Cli, Command, Config, Formatter, Session};
use tracing_subscriber::EnvFilter;

fn main() {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    let result = runtime.block_on(run());

    // Do not wait for a provider call abandoned after a timeout
    runtime.shutdown_background();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> finder_cli::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let mut config = Config::load_from(&config_path)?;

    // Command-line overrides
    if let Some(catalog) = cli.catalog {
        config.catalog.products_path = Some(catalog);
    }
    if let Some(url) = cli.ollama_url {
        config.llm.endpoint = url;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
        Some(Command::Categories) => {
            commands::execute_categories(&formatter)?;
        }
        command => {
            let session = Session::from_config(&config)?;
            match command {
                Some(Command::Search(args)) => {
                    commands::execute_search(args, &session, &formatter).await?;
                }
                Some(Command::Filter(args)) => {
                    commands::execute_filter(args, &session, &formatter)?;
                }
                _ => {
                    repl::run_repl(&session, &config, &formatter).await?;
                }
            }
        }
    }

    Ok(())
}

/// Log to stderr; stdout carries results.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
