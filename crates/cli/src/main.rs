//! Contact Book CLI - Database migrations and seed data.
//!
//! # Usage
//!
//! ```bash
//! # Create or upgrade the contacts table
//! contact-book migrate
//!
//! # Insert contacts from a YAML file
//! contact-book seed crates/cli/fixtures/contacts.yaml
//!
//! # Replace every existing contact with the file's contents
//! contact-book seed crates/cli/fixtures/contacts.yaml --clear
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "contact-book")]
#[command(author, version, about = "Contact Book CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Insert contacts listed in a YAML file
    Seed {
        /// Path to the YAML file
        file: String,

        /// Delete every existing contact first
        #[arg(long)]
        clear: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Seed { file, clear } => commands::seed::run(&file, clear).await,
    }
}
