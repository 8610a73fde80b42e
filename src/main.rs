//! nanomind: layer manifest checker
//!
//! Usage:
//!   nanomind check layer.toml [more.toml...]   → validate manifests
//!   nanomind check --json layer.toml           → print summaries as JSON
//!   nanomind events                            → list lifecycle events
//!   nanomind version                           → show version

use clap::{Parser, Subcommand};
use nanomind::check::check_all;
use nanomind_core::EVENTS;
use nanomind_dsl::Registry;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "nanomind",
    about = "Validate declarative NanoMind layer manifests",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Declare each manifest against the built-in registry
    Check {
        /// Manifest files (TOML)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Print reports as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List lifecycle event names
    Events,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Check { paths, json } => {
            let registry = Registry::builtin();
            let reports = check_all(&paths, &registry);

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{}", report);
                }
            }

            let failed = reports.iter().filter(|r| !r.is_ok()).count();
            if failed > 0 {
                anyhow::bail!("{} of {} manifest(s) failed", failed, reports.len());
            }
        }
        Commands::Events => {
            for event in EVENTS {
                println!("{}", event);
            }
        }
        Commands::Version => {
            println!("nanomind v{}", nanomind_core::VERSION);
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nanomind=info,nanomind_dsl=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
