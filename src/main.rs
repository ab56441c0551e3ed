// ABOUTME: CLI entry point for norms-exporter
// ABOUTME: Initializes logging and runs the one-shot export with the fixed configuration

use clap::Parser;
use norms_exporter::commands;
use norms_exporter::config::ExportConfig;

/// One-shot export of the norms database to a JSON document.
///
/// Reads norms_decoded.db from the working directory and writes
/// norms_data.json next to it. Takes no arguments; the table list and file
/// names are fixed.
#[derive(Parser)]
#[command(name = "norms-exporter")]
#[command(about = "Export norms_decoded.db tables to norms_data.json", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    // Initialize logging - default to INFO level if RUST_LOG not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let _cli = Cli::parse();

    commands::export(&ExportConfig::default())
}
