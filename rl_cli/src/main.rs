use crate::cli::{Cli, Commands};
use crate::client::CliClient;
use crate::error::Result;
use clap::Parser;
mod cli;
mod client;
mod commands;
mod error;
mod utils;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let cli_client = CliClient::new("http://localhost:3000");

    match cli.command {
        Commands::Run { prompt, .. } => commands::run::handle(&cli_client, prompt).await?,
        Commands::Ping => commands::ping::handle(&cli_client).await?,
    }

    Ok(())
}
