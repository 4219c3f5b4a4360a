//! cosmic-smoke - Smoke checks for a running Cosmic Catalog server
//!
//! Usage:
//!   cosmic-smoke                          - Run the core checks
//!   cosmic-smoke run [--extended]         - Run the configured checks
//!   cosmic-smoke run --check home-page    - Run selected checks only
//!   cosmic-smoke list                     - List available checks
//!   cosmic-smoke init [dir]               - Write a default config file

use clap::{Parser, Subcommand};
use cli::commands::{GlobalOptions, InitCommand, ListCommand, RunCommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cosmic-smoke")]
#[command(about = "Smoke checks for a running Cosmic Catalog server")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the catalog server, overrides config and COSMIC_BASE_URL
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run smoke checks
    Run(RunCommand),
    /// List available checks
    List(ListCommand),
    /// Write a default configuration file
    Init(InitCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = GlobalOptions {
        config: cli.config,
        base_url: cli.base_url,
        json: cli.json,
    };

    match cli.command {
        Some(Commands::Run(cmd)) => cmd.run(&options).await,
        Some(Commands::List(cmd)) => cmd.run(&options).map(|_| ExitCode::SUCCESS),
        Some(Commands::Init(cmd)) => cmd.run().map(|_| ExitCode::SUCCESS),
        None => RunCommand::default().run(&options).await,
    }
}
