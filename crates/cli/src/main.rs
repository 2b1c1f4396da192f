//! CSOM CLI - Shell configuration and remote diagnostics tools.
//!
//! # Usage
//!
//! ```bash
//! # Show the effective configuration and resolved tenant
//! csom-cli check
//!
//! # Classify a hostname without starting the shell
//! csom-cli tenant admin.example.com
//!
//! # Fetch every remote fragment and report health
//! csom-cli probe
//! ```
//!
//! # Commands
//!
//! - `check` - Load configuration and report the selected tenant
//! - `tenant` - Classify a hostname into its tenant flow
//! - `probe` - Fetch each remote's fragment entry point

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "csom-cli")]
#[command(author, version, about = "CSOM shell CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load configuration and report the selected tenant
    Check,
    /// Classify a hostname into its tenant flow
    Tenant {
        /// Hostname to classify (e.g. admin.example.com)
        hostname: String,
    },
    /// Fetch each remote's fragment entry point and report health
    Probe,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check => commands::check::run()?,
        Commands::Tenant { hostname } => commands::tenant::run(&hostname),
        Commands::Probe => commands::probe::run().await?,
    }
    Ok(())
}
