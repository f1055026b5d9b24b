//! # Scrum - Backlog & Sprint Board
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads:   ScrumConfig (shared)                           │
//! │    ├── Creates: InMemoryStore (adapter)                        │
//! │    ├── Creates: BacklogService / SprintService (use cases)     │
//! │    └── Runs:    The sprint walkthrough                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   scrum                         - Run the sprint walkthrough
//!   scrum demo --json             - Same, summary as JSON
//!   scrum config                  - Print the effective configuration
//!   scrum --config scrum.yaml ... - Use a config file

mod demo;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use shared::ScrumConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scrum")]
#[command(about = "Scrum - backlog and sprint board")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a JSON or YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk a backlog item through a whole sprint
    Demo,
    /// Print the effective configuration
    Config,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ScrumConfig> {
    match path {
        Some(path) => ScrumConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ScrumConfig::default()),
    }
}

/// What the command prints on stdout
fn render(command: Commands, json: bool, config: &ScrumConfig) -> anyhow::Result<String> {
    let output = match command {
        Commands::Demo => {
            let summary = demo::run(config)?;
            if json {
                serde_json::to_string_pretty(&summary)?
            } else {
                summary.to_string()
            }
        }
        Commands::Config => {
            if json {
                serde_json::to_string_pretty(config)?
            } else {
                format!(
                    "scheduling policy: {}\nlog level:         {}",
                    config.scheduling_policy(),
                    config.log_level
                )
            }
        }
    };
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    // Initialize logging; RUST_LOG wins over the configured level.
    // Logs go to stderr so stdout only carries the command output.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = render(cli.command.unwrap_or(Commands::Demo), cli.json, &config)?;
    println!("{}", output.trim_end());

    Ok(())
}
