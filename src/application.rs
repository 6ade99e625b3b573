// IDS Monitor - Application
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Command line surface and run loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::{self, AppConfig};
use crate::controller::{AnalysisController, DashboardController};
use crate::gateway::{coerce_flow_count, Backend, HttpBackend};
use crate::ui;

/// Monitor for a three-level network intrusion classification service.
#[derive(Debug, Parser)]
#[command(name = "ids-monitor", version, about)]
pub struct Cli {
    /// Base URL of the classification service (overrides IDS_API_URL).
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Seed for chart shaping and random-attack draws, for reproducible runs.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the live monitor.
    Dashboard {
        /// Run a simulation after connecting.
        #[arg(long)]
        simulate: bool,
        /// Keep simulating every SECS seconds (configured interval if omitted).
        #[arg(long, value_name = "SECS")]
        watch: Option<Option<u64>>,
        /// Overlapping simulations issued per round.
        #[arg(long, default_value_t = 1)]
        burst: usize,
        /// Flows per simulation.
        #[arg(long, allow_hyphen_values = true)]
        flows: Option<i64>,
    },
    /// Classify one dataset flow.
    Analyze {
        /// Flow index. Invalid or negative input is read as 0.
        #[arg(long, allow_hyphen_values = true)]
        index: Option<String>,
    },
    /// Classify a flow drawn at random from the attack range.
    RandomAttack,
    /// Check that the classification service is reachable.
    Stats,
}

/// The monitor application.
pub struct Application {
    config: &'static AppConfig,
    backend: Arc<dyn Backend>,
    seed: Option<u64>,
}

impl Application {
    /// Resolve configuration and build the HTTP gateway.
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut settings = AppConfig::load();
        if let Some(url) = &cli.api_url {
            settings.api_url = url.clone();
        }
        let config = config::init(settings);

        let backend = HttpBackend::new(&config.api_url)?;
        info!("Using classification service at {}", backend.base_url());

        Ok(Self {
            config,
            backend: Arc::new(backend),
            seed: cli.seed,
        })
    }

    pub async fn run(&self, command: Option<Command>) -> Result<()> {
        match command.unwrap_or(Command::Dashboard {
            simulate: false,
            watch: None,
            burst: 1,
            flows: None,
        }) {
            Command::Dashboard {
                simulate,
                watch,
                burst,
                flows,
            } => self.dashboard(simulate, watch, burst, flows).await,
            Command::Analyze { index } => self.analyze(index).await,
            Command::RandomAttack => self.random_attack().await,
            Command::Stats => self.stats().await,
        }
    }

    async fn dashboard(
        &self,
        simulate: bool,
        watch: Option<Option<u64>>,
        burst: usize,
        flows: Option<i64>,
    ) -> Result<()> {
        let mut settings = self.config.clone();
        if let Some(flows) = flows {
            settings.simulate_flows = coerce_flow_count(flows);
        }

        let mut ctrl = DashboardController::new(Arc::clone(&self.backend), &settings);
        if let Some(seed) = self.seed {
            ctrl = ctrl.with_rng(StdRng::seed_from_u64(seed));
        }
        ctrl.mount().await;

        if simulate || watch.is_some() {
            Self::simulate_round(&mut ctrl, burst).await;
        }
        println!("{}", ui::render_dashboard(ctrl.view()));

        let Some(secs) = watch else {
            return Ok(());
        };
        let period = Duration::from_secs(secs.unwrap_or(settings.watch_interval_secs).max(1));
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    Self::simulate_round(&mut ctrl, burst).await;
                    println!("{}", ui::render_dashboard(ctrl.view()));
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Stopping watch");
                    return Ok(());
                }
            }
        }
    }

    async fn simulate_round(ctrl: &mut DashboardController, burst: usize) {
        if burst > 1 {
            ctrl.simulate_burst(burst).await;
        } else {
            ctrl.simulate().await;
        }
    }

    fn analysis_controller(&self) -> AnalysisController {
        let ctrl = AnalysisController::new(Arc::clone(&self.backend), self.config);
        match self.seed {
            Some(seed) => ctrl.with_rng(StdRng::seed_from_u64(seed)),
            None => ctrl,
        }
    }

    async fn analyze(&self, index: Option<String>) -> Result<()> {
        let mut ctrl = self.analysis_controller();
        if let Some(raw) = index {
            ctrl.set_index_input(&raw);
        }
        let index = ctrl.view().index;
        ctrl.run_analyze(index).await;
        println!("{}", ui::render_analysis(ctrl.view()));
        Ok(())
    }

    async fn random_attack(&self) -> Result<()> {
        let mut ctrl = self.analysis_controller();
        ctrl.run_random_attack().await;
        println!("{}", ui::render_analysis(ctrl.view()));
        Ok(())
    }

    async fn stats(&self) -> Result<()> {
        println!("{}", self.stats_report().await);
        Ok(())
    }

    /// Reachability report for the `stats` command. Failures are reported inline.
    async fn stats_report(&self) -> String {
        let url = &self.config.api_url;
        match self.backend.fetch_stats().await {
            Ok(summary) => {
                let mut lines = vec![format!("Backend reachable at {}", url)];
                if let (Some(threats), Some(safe)) = (summary.threats, summary.safe) {
                    lines.push(format!("Threats: {}   Safe: {}", threats, safe));
                }
                if let Some(total) = summary.total {
                    lines.push(format!("Flows classified: {}", total));
                }
                if let Some(avg) = summary.avg_response {
                    lines.push(format!("Avg response: {}", avg));
                }
                lines.join("\n")
            }
            Err(e) if e.is_unreachable() => {
                warn!("Stats check failed: {}", e);
                format!("Backend unreachable at {}: {}", url, e)
            }
            Err(e) => format!("Backend reachable at {} (stats unavailable: {})", url, e),
        }
    }
}
