//! CLI module
//!
//! This module provides the command-line interface functionality for the itemctl tool.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use futures::future::join_all;
use std::io;
use tracing::Level;

use crate::{
    api::{ClientConfig, ClientError, DEFAULT_BASE_URL},
    facade::{ItemCommand, ItemFacade, Outcome},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Item service endpoint URL
    #[arg(short, long, env = "ITEMCTL_SERVER", default_value = DEFAULT_BASE_URL, global = true)]
    server: String,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, default_value_t = Level::INFO, global = true)]
    log_level: Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new item
    Create {
        /// Item name
        name: String,

        /// Item description
        description: String,

        /// Item price
        #[arg(allow_negative_numbers = true)]
        price: i32,
    },

    /// Get an item by ID
    Get {
        /// Item ID (numeric)
        id: String,
    },

    /// Replace the fields of an existing item
    Update {
        /// Item ID (numeric)
        id: String,

        /// New item name
        name: String,

        /// New item description
        description: String,

        /// New item price
        #[arg(allow_negative_numbers = true)]
        price: i32,
    },

    /// Delete an item by ID
    Delete {
        /// Item ID (numeric)
        id: String,
    },

    /// List all items
    List,

    /// Run the example sequence (create, get, delete, list) concurrently
    Demo,

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Errors surfaced by the CLI
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The facade already logged this failure
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("{0} of {1} demo calls failed")]
    Demo(usize, usize),

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Background call panicked: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl CliError {
    /// True when the failure has already been written to the log
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Client(_) | CliError::Demo(..))
    }
}

/// Run the CLI application
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    let command = match cli.command {
        Commands::Create {
            name,
            description,
            price,
        } => ItemCommand::Create {
            name,
            description,
            price,
        },
        Commands::Get { id } => ItemCommand::Get { id },
        Commands::Update {
            id,
            name,
            description,
            price,
        } => ItemCommand::Update {
            id,
            name,
            description,
            price,
        },
        Commands::Delete { id } => ItemCommand::Delete { id },
        Commands::List => ItemCommand::List,

        Commands::Demo => {
            let facade = create_facade(&cli.server);
            return run_demo(&facade).await;
        }

        Commands::Completions { shell } => {
            // Generate completions for the specified shell
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut io::stdout());
            return Ok(());
        }
    };

    let facade = create_facade(&cli.server);
    let outcome = facade.execute(command).await?;
    print_outcome(&outcome)
}

/// Print an error that the facade has not already logged
pub fn report_error(error: &CliError) {
    if !error.is_reported() {
        eprintln!("{} {}", "error:".red().bold(), error);
    }
}

fn init_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn create_facade(server_url: &str) -> ItemFacade {
    ItemFacade::http(ClientConfig::new(server_url))
}

/// The calls the original example script fires off, all at once
fn demo_commands() -> Vec<ItemCommand> {
    vec![
        ItemCommand::Create {
            name: "Sample Item".to_string(),
            description: "This is a description of the sample item".to_string(),
            price: 100,
        },
        ItemCommand::Get {
            id: "1".to_string(),
        },
        ItemCommand::Delete {
            id: "123".to_string(),
        },
        ItemCommand::List,
    ]
}

async fn run_demo(facade: &ItemFacade) -> Result<(), CliError> {
    let handles: Vec<_> = demo_commands()
        .into_iter()
        .map(|command| facade.spawn(command))
        .collect();
    let total = handles.len();

    let mut failed = 0;
    for joined in join_all(handles).await {
        match joined? {
            Ok(outcome) => print_outcome(&outcome)?,
            Err(_) => failed += 1,
        }
    }

    if failed > 0 {
        Err(CliError::Demo(failed, total))
    } else {
        Ok(())
    }
}

fn print_outcome(outcome: &Outcome) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_get_with_server() {
        let cli = Cli::try_parse_from(["itemctl", "--server", "http://proxy:8089", "get", "7"])
            .unwrap();
        assert_eq!(cli.server, "http://proxy:8089");
        match cli.command {
            Commands::Get { id } => assert_eq!(id, "7"),
            _ => panic!("expected get command"),
        }
    }

    #[test]
    fn test_get_accepts_non_numeric_text() {
        // Identifier validation belongs to the facade, not the parser
        let cli = Cli::try_parse_from(["itemctl", "get", "item123"]).unwrap();
        assert!(matches!(cli.command, Commands::Get { id } if id == "item123"));
    }

    #[test]
    fn test_parse_create() {
        let cli =
            Cli::try_parse_from(["itemctl", "create", "Sample Item", "A description", "100"])
                .unwrap();
        match cli.command {
            Commands::Create {
                name,
                description,
                price,
            } => {
                assert_eq!(name, "Sample Item");
                assert_eq!(description, "A description");
                assert_eq!(price, 100);
            }
            _ => panic!("expected create command"),
        }
    }

    #[test]
    fn test_parse_log_level() {
        let cli = Cli::try_parse_from(["itemctl", "list", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, Level::DEBUG);
    }

    #[test]
    fn test_demo_commands_match_example_sequence() {
        let commands = demo_commands();
        assert_eq!(commands.len(), 4);
        assert!(matches!(&commands[0], ItemCommand::Create { name, price: 100, .. } if name == "Sample Item"));
        assert_eq!(commands[3], ItemCommand::List);
    }

    #[test]
    fn test_reported_errors() {
        assert!(CliError::Demo(1, 4).is_reported());
        assert!(CliError::Client(ClientError::MissingData).is_reported());
    }
}
