//! nomi-cli - command-line client for the Nomi.ai API
//!
//! Main entry point for the CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod display;
mod spinner;

use commands::{chat, get_nomi, list_nomis, list_rooms, version};
use config::Config;

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// A CLI client for the Nomi.ai API
#[derive(Parser)]
#[command(name = "nomi-cli")]
#[command(author, version = version::VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// API key for Nomi.ai (overrides NOMI_API_KEY)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all Nomis
    ListNomis(list_nomis::ListNomisArgs),

    /// Get details of a specific Nomi
    GetNomi(get_nomi::GetNomiArgs),

    /// Start a live chat session with a specific Nomi
    Chat(chat::ChatArgs),

    /// List all rooms
    ListRooms(list_rooms::ListRoomsArgs),

    /// Print the version number of nomi-cli
    Version(version::VersionArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with command output
    let filter = if cli.verbose {
        "nomi=debug,nomi_client=debug,warn"
    } else {
        "nomi=warn,nomi_client=warn,warn"
    };

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
                ),
        )
        .init();

    // Every command needs a key, so check before dispatching
    let config = match Config::from_env(cli.api_key) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "configuration resolved");

    let ctx = commands::Context {
        config,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    // Dispatch to command handlers
    match cli.command {
        Commands::ListNomis(args) => list_nomis::run(args, &ctx).await,
        Commands::GetNomi(args) => get_nomi::run(args, &ctx).await,
        Commands::Chat(args) => chat::run(args, &ctx).await,
        Commands::ListRooms(args) => list_rooms::run(args, &ctx).await,
        Commands::Version(args) => version::run(args),
    }
}
