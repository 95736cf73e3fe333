use clap::Parser;
use scaffold_backend::cli::{execute_command, Cli};
use scaffold_backend::config::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();
    execute_command(cli).await
}
