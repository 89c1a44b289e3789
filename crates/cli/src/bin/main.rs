// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use yaml_reorder_cli::{Cli, Driver, EXIT_FATAL, EXIT_INTERRUPTED, ReorderConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = ReorderConfig::from(&cli);

    match run(config, cli.files).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Fatal error: {e:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

async fn run(config: ReorderConfig, files: Vec<PathBuf>) -> anyhow::Result<ExitCode> {
    init_logging(&config)?;
    tracing::debug!("Starting yaml-reorder with {}", config.dialect);

    // The batch is blocking file I/O; Ctrl-C races it from the runtime thread
    let batch = tokio::task::spawn_blocking(move || Driver::new(config).run(&files));

    tokio::select! {
        report = batch => {
            let report = report.context("batch worker panicked")?;
            Ok(ExitCode::from(report.outcome().exit_code()))
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            eprintln!("Interrupted");
            // Writes are rename-based, so stopping mid-batch leaves no partial file
            std::process::exit(i32::from(EXIT_INTERRUPTED));
        }
    }
}

fn init_logging(config: &ReorderConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")
}
