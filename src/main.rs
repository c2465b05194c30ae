use calsona::cli::Cli;
use calsona::startup;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    let cli = Cli::parse();

    info!("Starting calsona");

    // Load configuration
    let config = startup::load_config()?;

    // Run the selected command
    startup::run(config, cli.command).await
}
