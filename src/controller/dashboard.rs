// IDS Monitor - Dashboard Controller
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Live monitor view: connectivity probe and simulation-driven charts.

use std::sync::Arc;

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use super::state::{Fence, Phase, Ticket};
use crate::config::AppConfig;
use crate::gateway::{Backend, GatewayError};
use crate::models::{SimulationBatch, StatsSummary};
use crate::stats::{
    self, bucketize_traffic, group_by_family, to_recent_alerts, AlertRow, DashboardStats, FamilyCount,
    TrafficBucket, RECENT_ALERT_LIMIT,
};

const SIMULATION_ERROR: &str = "Simulation error. Check the logs for details.";

/// Everything the dashboard displays.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub phase: Phase,
    /// A simulation is in flight. The view stays usable meanwhile.
    pub simulating: bool,
    pub error_message: Option<String>,
    pub stats: DashboardStats,
    pub traffic_buckets: Vec<TrafficBucket>,
    pub family_counts: Vec<FamilyCount>,
    pub recent_alerts: Vec<AlertRow>,
    /// Whether the charts show simulation data rather than placeholders.
    pub live: bool,
    /// When the last simulation was applied.
    pub updated_at: Option<DateTime<Local>>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            simulating: false,
            error_message: None,
            stats: DashboardStats::default(),
            traffic_buckets: stats::placeholder::traffic(),
            family_counts: stats::placeholder::families(),
            recent_alerts: stats::placeholder::activity(),
            live: false,
            updated_at: None,
        }
    }
}

/// Controller owning the dashboard view.
pub struct DashboardController {
    backend: Arc<dyn Backend>,
    view: DashboardView,
    fence: Fence,
    rng: StdRng,
    num_flows: u32,
    api_url: String,
}

impl DashboardController {
    /// Create a controller with a fresh idle view.
    pub fn new(backend: Arc<dyn Backend>, config: &AppConfig) -> Self {
        Self {
            backend,
            view: DashboardView::default(),
            fence: Fence::new(),
            rng: StdRng::from_entropy(),
            num_flows: config.simulate_flows.max(1),
            api_url: config.api_url.clone(),
        }
    }

    /// Replace the randomness used to shape the traffic chart.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    /// Start the connectivity probe done on mount.
    pub fn begin_mount(&mut self) -> Ticket {
        self.view.phase = Phase::Loading;
        self.view.error_message = None;
        self.fence.issue()
    }

    /// Apply the outcome of the connectivity probe.
    ///
    /// Only an unreachable backend is an error: any answer, even a failed
    /// one, proves the service is up.
    pub fn finish_mount(&mut self, ticket: Ticket, outcome: Result<StatsSummary, GatewayError>) {
        if !self.fence.admit(ticket) {
            debug!("Dropping stale stats probe #{}", ticket.seq());
            return;
        }

        match outcome {
            Ok(summary) => {
                debug!("Stats loaded: {:?}", summary);
                self.view.phase = Phase::Ready;
            }
            Err(e) if e.is_unreachable() => {
                warn!("Failed to load stats: {}", e);
                self.view.phase = Phase::Error;
                self.view.error_message = Some(format!(
                    "Failed to connect to backend. Make sure the detection API is running at {}.",
                    self.api_url
                ));
            }
            Err(e) => {
                warn!("Stats probe answered with HTTP {:?}: {}", e.status(), e);
                self.view.phase = Phase::Ready;
            }
        }
    }

    /// Probe the backend.
    pub async fn mount(&mut self) {
        let ticket = self.begin_mount();
        let outcome = self.backend.fetch_stats().await;
        self.finish_mount(ticket, outcome);
    }

    /// Start a simulation request.
    pub fn begin_simulate(&mut self) -> Ticket {
        self.view.simulating = true;
        self.view.error_message = None;
        self.fence.issue()
    }

    /// Apply a simulation outcome. Failures keep the displayed data.
    pub fn finish_simulate(&mut self, ticket: Ticket, outcome: Result<SimulationBatch, GatewayError>) {
        if self.fence.is_latest(ticket) {
            self.view.simulating = false;
        }
        if !self.fence.admit(ticket) {
            debug!("Dropping stale simulation #{}", ticket.seq());
            return;
        }

        match outcome {
            Ok(batch) => {
                self.apply_batch(&batch);
                info!("Simulation completed with {} attacks detected", batch.attack_flows);
            }
            Err(e) => {
                warn!("Simulation error: {}", e);
                self.view.phase = Phase::Error;
                self.view.error_message = Some(SIMULATION_ERROR.to_string());
            }
        }
    }

    /// Run one simulation to completion.
    pub async fn simulate(&mut self) {
        let ticket = self.begin_simulate();
        let outcome = self.backend.simulate(self.num_flows).await;
        self.finish_simulate(ticket, outcome);
    }

    /// Fire `count` overlapping simulations and apply them as they resolve.
    pub async fn simulate_burst(&mut self, count: usize) {
        let mut tasks = JoinSet::new();
        for _ in 0..count {
            let ticket = self.begin_simulate();
            let backend = Arc::clone(&self.backend);
            let num_flows = self.num_flows;
            tasks.spawn(async move { (ticket, backend.simulate(num_flows).await) });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((ticket, outcome)) => self.finish_simulate(ticket, outcome),
                Err(e) => warn!("Simulation task failed: {}", e),
            }
        }
        self.view.simulating = false;
    }

    fn apply_batch(&mut self, batch: &SimulationBatch) {
        if !batch.is_consistent() {
            warn!(
                "Flow counters do not add up: {} benign + {} attack != {} total",
                batch.benign_flows, batch.attack_flows, batch.total_flows
            );
        }
        let attack_results = batch.results.iter().filter(|r| r.is_attack()).count();
        if attack_results != batch.alerts.len() {
            debug!(
                "Batch carries {} attack results but {} alerts",
                attack_results,
                batch.alerts.len()
            );
        }

        self.view.stats = DashboardStats::from_batch(batch);
        self.view.traffic_buckets = bucketize_traffic(batch.attack_flows, batch.benign_flows, &mut self.rng);
        self.view.family_counts = group_by_family(&batch.alerts);
        self.view.recent_alerts = to_recent_alerts(&batch.alerts, RECENT_ALERT_LIMIT);
        self.view.live = true;
        self.view.updated_at = Some(Local::now());
        self.view.phase = Phase::Ready;
        self.view.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::fake::{sample_batch, FakeBackend, Mode};
    use crate::models::Level1;
    use crate::stats::models::ActivityTag;

    fn controller(mode: Mode) -> (Arc<FakeBackend>, DashboardController) {
        let backend = Arc::new(FakeBackend::new(mode));
        let ctrl = DashboardController::new(backend.clone(), &AppConfig::default())
            .with_rng(StdRng::seed_from_u64(5));
        (backend, ctrl)
    }

    #[test]
    fn test_initial_view_shows_placeholders() {
        let (_, ctrl) = controller(Mode::Online);
        let view = ctrl.view();
        assert_eq!(view.phase, Phase::Idle);
        assert!(!view.live);
        assert_eq!(view.traffic_buckets.len(), 6);
        assert_eq!(view.family_counts[0], FamilyCount::new("DoS", 34));
        assert_eq!(view.recent_alerts[1].tag, ActivityTag::Safe);
        assert_eq!(view.stats.avg_response_label, "5ms");
    }

    #[tokio::test]
    async fn test_mount_online_is_ready() {
        let (_, mut ctrl) = controller(Mode::Online);
        ctrl.mount().await;
        assert_eq!(ctrl.view().phase, Phase::Ready);
        assert!(ctrl.view().error_message.is_none());
    }

    #[tokio::test]
    async fn test_mount_offline_is_error() {
        let (_, mut ctrl) = controller(Mode::Offline);
        ctrl.mount().await;
        let view = ctrl.view();
        assert_eq!(view.phase, Phase::Error);
        assert!(view.error_message.as_deref().unwrap().contains("http://localhost:5000"));
        // Charts still have something to show.
        assert_eq!(view.family_counts.len(), 4);
    }

    #[tokio::test]
    async fn test_mount_with_http_error_is_still_ready() {
        let (_, mut ctrl) = controller(Mode::Broken);
        ctrl.mount().await;
        assert_eq!(ctrl.view().phase, Phase::Ready);
    }

    #[tokio::test]
    async fn test_simulate_derives_view() {
        let (backend, mut ctrl) = controller(Mode::Online);
        ctrl.mount().await;
        ctrl.simulate().await;

        assert_eq!(*backend.simulate_calls.lock().unwrap(), vec![50]);

        let view = ctrl.view();
        assert_eq!(view.phase, Phase::Ready);
        assert!(!view.simulating);
        assert!(view.live);
        assert!(view.updated_at.is_some());
        assert_eq!(view.stats.threat_count, 10);
        assert_eq!(view.stats.safe_count, 40);
        assert_eq!(
            view.family_counts,
            vec![
                FamilyCount::new("DoS", 4),
                FamilyCount::new("BruteForce", 3),
                FamilyCount::new("WebAttack", 2),
                FamilyCount::new("RareAttack", 1),
            ]
        );
        assert_eq!(view.recent_alerts.len(), 10);
        assert!(view.recent_alerts.iter().all(|r| r.level1 == Level1::Attack && r.tag == ActivityTag::High));
        assert_eq!(view.traffic_buckets.len(), 6);
    }

    #[tokio::test]
    async fn test_failed_simulation_keeps_previous_data() {
        let (backend, mut ctrl) = controller(Mode::Online);
        ctrl.simulate().await;
        let before = ctrl.view().clone();

        backend.set_mode(Mode::Offline);
        ctrl.simulate().await;

        let view = ctrl.view();
        assert_eq!(view.phase, Phase::Error);
        assert_eq!(view.error_message.as_deref(), Some(SIMULATION_ERROR));
        assert!(!view.simulating);
        assert_eq!(view.family_counts, before.family_counts);
        assert_eq!(view.traffic_buckets, before.traffic_buckets);
        assert_eq!(view.stats, before.stats);
        assert!(view.live);
    }

    #[tokio::test]
    async fn test_simulation_success_clears_error() {
        let (backend, mut ctrl) = controller(Mode::Offline);
        ctrl.simulate().await;
        assert_eq!(ctrl.view().phase, Phase::Error);

        backend.set_mode(Mode::Online);
        ctrl.simulate().await;
        assert_eq!(ctrl.view().phase, Phase::Ready);
        assert!(ctrl.view().error_message.is_none());
    }

    #[test]
    fn test_stale_simulation_is_dropped() {
        let (_, mut ctrl) = controller(Mode::Online);
        let older = ctrl.begin_simulate();
        let newer = ctrl.begin_simulate();
        assert!(ctrl.view().simulating);

        let mut fresh = sample_batch();
        fresh.attack_flows = 12;
        fresh.benign_flows = 38;
        ctrl.finish_simulate(newer, Ok(fresh));
        assert!(!ctrl.view().simulating);

        ctrl.finish_simulate(older, Ok(sample_batch()));
        assert_eq!(ctrl.view().stats.threat_count, 12);

        // A stale failure does not flip the view to error either.
        let (_, mut ctrl) = controller(Mode::Online);
        let older = ctrl.begin_simulate();
        let newer = ctrl.begin_simulate();
        ctrl.finish_simulate(newer, Ok(sample_batch()));
        ctrl.finish_simulate(older, Err(GatewayError::Network("timed out".to_string())));
        assert_eq!(ctrl.view().phase, Phase::Ready);
    }

    #[test]
    fn test_simulating_until_latest_resolves() {
        let (_, mut ctrl) = controller(Mode::Online);
        let older = ctrl.begin_simulate();
        let newer = ctrl.begin_simulate();

        ctrl.finish_simulate(older, Ok(sample_batch()));
        assert!(ctrl.view().simulating);
        assert!(ctrl.view().live);

        ctrl.finish_simulate(newer, Ok(sample_batch()));
        assert!(!ctrl.view().simulating);
    }

    #[tokio::test]
    async fn test_simulate_burst() {
        let (backend, mut ctrl) = controller(Mode::Online);
        ctrl.simulate_burst(4).await;
        assert_eq!(backend.simulate_calls.lock().unwrap().len(), 4);
        assert!(!ctrl.view().simulating);
        assert_eq!(ctrl.view().phase, Phase::Ready);
        assert_eq!(ctrl.view().stats.threat_count, 10);
    }
}
