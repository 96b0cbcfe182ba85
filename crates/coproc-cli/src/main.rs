//! Coproc CLI - operator tooling for the coprocessor host.
//!
//! `coproc status` reports the engine's CPU usage along with free memory and
//! free disk space under the coprocessor directory.

use anyhow::Result;
use clap::{Parser, Subcommand};
use coproc_core::{gather_metrics, Metrics, MetricsConfig, RegistryConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "coproc")]
#[command(about = "Operator tooling for the coprocessor host")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print host metrics for the coprocessor engine
    Status {
        /// Coprocessor directory whose disk is measured
        #[arg(long, default_value = RegistryConfig::DEFAULT_DIRECTORY)]
        directory: PathBuf,

        /// File holding the PID of the engine process
        #[arg(long)]
        pid_file: PathBuf,

        /// CPU sampling window in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match args.command {
        Command::Status {
            directory,
            pid_file,
            interval_ms,
            json,
        } => {
            let interval = interval_ms
                .map(Duration::from_millis)
                .unwrap_or(MetricsConfig::CPU_SAMPLE_INTERVAL);
            info!("Gathering metrics for {}", directory.display());

            let (metrics, errors) = gather_metrics(&directory, &pid_file, interval);
            for err in &errors {
                warn!("{}", err);
            }

            let report = if json {
                serde_json::to_string_pretty(&metrics)?
            } else {
                render_text(&metrics)
            };

            // Report goes to stdout, logs to stderr
            println!("{}", report);
        }
    }

    Ok(())
}

fn render_text(metrics: &Metrics) -> String {
    [
        ("CPU", format!("{:.2}%", metrics.cpu_percentage)),
        ("Free memory", format!("{:.2} MB", metrics.free_memory_mb)),
        ("Free space", format!("{:.2} MB", metrics.free_space_mb)),
    ]
    .iter()
    .map(|(name, value)| format!("{:<12} {}", format!("{}:", name), value))
    .collect::<Vec<_>>()
    .join("\n")
}
