// IDS Monitor - Main Entry Point
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! IDS Monitor - terminal monitor for a network intrusion classification service.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod application;
mod config;
mod controller;
mod gateway;
mod models;
mod stats;
mod ui;

use application::{Application, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so rendered views stay clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app = Application::new(&cli)?;
    app.run(cli.command).await
}
