//! Region Control - CLI client for the region telemetry daemon
//!
//! Thin operator interface over regiond's HTTP API.

mod client;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "regionctl")]
#[command(about = "Query per-node GPU region telemetry", long_about = None)]
#[command(version)]
struct Cli {
    /// Base URL of the regiond HTTP API
    #[arg(long, default_value = "http://127.0.0.1:7610")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show daemon health
    Status,

    /// Fetch the region document for one node
    Regions {
        identifier: String,
        entity: String,
        node: String,

        /// Pretty-print the JSON body
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = client::DaemonClient::new(cli.url);

    match cli.command {
        Commands::Status => commands::status(&client).await,
        Commands::Regions {
            identifier,
            entity,
            node,
            pretty,
        } => commands::regions(&client, identifier, entity, node, pretty).await,
    }
}
