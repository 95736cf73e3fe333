// CLI module - server, migrations and the terminal item front-end

pub mod items;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::client::{ApiClient, DEFAULT_BASE_URL};
use crate::config::AppSettings;

/// Item scaffold CLI
#[derive(Parser, Debug)]
#[command(name = "scaffold-backend")]
#[command(about = "Item scaffold API server and client", long_about = None)]
pub struct Cli {
    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve,

    /// Run pending database migrations and exit
    Migrate,

    /// Manage items through a running API server
    Items {
        /// Base URL of the API server
        #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_BASE_URL)]
        api_url: String,

        #[command(subcommand)]
        command: ItemCommands,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ItemCommands {
    /// List one page of items
    List {
        #[arg(long, default_value_t = 1)]
        page: u64,

        #[arg(long, default_value_t = 10)]
        size: u64,
    },

    /// Show a single item
    Get { id: i32 },

    /// Create an item
    Create {
        name: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// Change the name and/or description of an item
    Update {
        id: i32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,

        /// Set the description to null
        #[arg(long)]
        clear_description: bool,
    },

    /// Delete an item
    Delete { id: i32 },
}

/// Execute CLI command
///
/// Routes the parsed CLI command to the appropriate handler function.
///
/// # Returns
/// * `Ok(())` - Command executed successfully
/// * `Err(...)` - Command execution failed
pub async fn execute_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let settings = AppSettings::from_env()?;
            serve::run_server(settings).await?;
        }
        Commands::Migrate => {
            let settings = AppSettings::from_env()?;
            migrate::run_migrations(&settings).await?;
        }
        Commands::Items { api_url, command } => {
            let client = ApiClient::new(api_url);
            let output = items::run(&client, command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["scaffold-backend"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_items_update_parses() {
        let cli = Cli::try_parse_from([
            "scaffold-backend",
            "items",
            "--api-url",
            "http://api.test",
            "update",
            "7",
            "--clear-description",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Items { api_url, command }) => {
                assert_eq!(api_url, "http://api.test");
                assert_eq!(
                    command,
                    ItemCommands::Update {
                        id: 7,
                        name: None,
                        description: None,
                        clear_description: true,
                    }
                );
            }
            other => panic!("Expected items command, got {:?}", other),
        }
    }

    #[test]
    fn test_description_conflicts_with_clear() {
        let result = Cli::try_parse_from([
            "scaffold-backend",
            "items",
            "update",
            "7",
            "--description",
            "x",
            "--clear-description",
        ]);
        assert!(result.is_err());
    }
}
