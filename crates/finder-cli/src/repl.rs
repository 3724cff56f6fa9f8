//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Every line that is not a REPL command is treated as a natural-language
//! product request.

use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl(session: &Session, config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info(&format!(
            "Finder REPL ({} products, provider: {}) - Type 'help' for commands, 'exit' to quit",
            session.catalog().len(),
            session.provider_name()
        ))
    );
    println!();

    let mut editor = new_editor(config.settings.history_size)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("finder> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_line(line) {
                    ReplCommand::Exit => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    ReplCommand::Help => print_help(formatter),
                    ReplCommand::Categories => {
                        if let Err(e) = commands::execute_categories(formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    ReplCommand::Query(query) => {
                        let (interpretation, results) = session.search(&query).await;
                        match formatter.format_search(&interpretation, &results) {
                            Ok(output) => {
                                println!("{}\n", output);
                                if let Some(notice) = formatter.quiet_empty_notice(&results) {
                                    eprintln!("{}", notice);
                                }
                            }
                            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Categories,
    Query(String),
}

/// Parse a REPL line. Anything unrecognized is a query.
fn parse_repl_line(line: &str) -> ReplCommand {
    match line.trim() {
        "exit" | "quit" | "q" => ReplCommand::Exit,
        "help" | "?" => ReplCommand::Help,
        "categories" => ReplCommand::Categories,
        query => ReplCommand::Query(query.to_string()),
    }
}

fn new_editor(history_size: usize) -> Result<DefaultEditor> {
    let editor_config = rustyline::Config::builder()
        .max_history_size(history_size)
        .map_err(readline_error)?
        .auto_add_history(false)
        .build();
    DefaultEditor::with_config(editor_config).map_err(readline_error)
}

fn readline_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let finder_dir = home.join(".finder");
    std::fs::create_dir_all(&finder_dir)?;
    Ok(finder_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Describe what you are looking for, e.g.:"));
    println!();
    println!("  clothing under $50");
    println!("  electronics between 30 and 100 dollars");
    println!("  anything over 1000");
    println!();
    println!("{}", formatter.info("Commands:"));
    println!("  categories                     - List recognized categories");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}
