// IDS Monitor - Dashboard Page
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Live monitor page: headline cards, traffic, families and recent activity.

use std::fmt::Write;

use super::widgets::{BarChart, DataSeries, LineChart};
use crate::controller::{DashboardView, Phase};

const CHART_WIDTH: usize = 32;

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Live Monitor");
    let _ = writeln!(out, "Real-time network threat analysis");
    if let Some(error) = &view.error_message {
        let _ = writeln!(out, "\n[!] Connection Error: {}", error);
    }

    let status = match (view.phase, view.simulating) {
        (_, true) => "Simulating...",
        (Phase::Idle, _) => "Idle",
        (Phase::Loading, _) => "Connecting...",
        (Phase::Ready, _) => "Connected",
        (Phase::Error, _) => "Offline",
    };
    let source = match view.updated_at {
        Some(at) if view.live => format!("updated {}", at.format("%H:%M:%S")),
        _ => "sample data".to_string(),
    };
    let _ = writeln!(out, "\nStatus: {} ({})", status, source);

    let _ = writeln!(
        out,
        "\nThreats Detected: {}   Safe Packets: {}   Avg Response: {}",
        view.stats.threat_count, view.stats.safe_count, view.stats.avg_response_label
    );

    let _ = writeln!(out, "\nTraffic Over Time");
    let mut traffic = LineChart::new(CHART_WIDTH);
    traffic.set_series(
        view.traffic_buckets.iter().map(|b| b.time_label.to_string()).collect(),
        vec![
            DataSeries::new("attacks", view.traffic_buckets.iter().map(|b| b.attacks).collect()),
            DataSeries::new("benign", view.traffic_buckets.iter().map(|b| b.benign).collect()),
        ],
    );
    out.push_str(&traffic.render());

    let _ = writeln!(out, "\nThreats by Family");
    let mut families = BarChart::new(CHART_WIDTH);
    families.set_placeholder("No attacks in this batch");
    families.set_data(
        &view
            .family_counts
            .iter()
            .map(|f| (f.name.clone(), f.count))
            .collect::<Vec<_>>(),
    );
    out.push_str(&families.render());

    let _ = writeln!(out, "\nRecent Activity");
    if view.recent_alerts.is_empty() {
        let _ = writeln!(out, "  No alerts");
    }
    for row in &view.recent_alerts {
        let _ = writeln!(
            out,
            "  {:<6}  {:<12}  {:<20}  {}",
            row.level1, row.family, row.kind, row.tag.label()
        );
    }

    out
}
