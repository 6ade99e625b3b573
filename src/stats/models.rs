// IDS Monitor - Statistics Models
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! View-ready structures derived from simulation batches.

use crate::models::{Alert, Level1, Severity, SimulationBatch};

/// Label of the fixed average-response card.
pub const AVG_RESPONSE_LABEL: &str = "5ms";

/// Time labels of the six traffic buckets, in display order.
pub const TIME_LABELS: [&str; 6] = ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"];

/// One point of the traffic-over-time chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficBucket {
    pub time_label: &'static str,
    pub attacks: u64,
    pub benign: u64,
}

impl TrafficBucket {
    pub fn new(time_label: &'static str, attacks: u64, benign: u64) -> Self {
        Self {
            time_label,
            attacks,
            benign,
        }
    }
}

/// Number of alerts seen for one attack family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyCount {
    pub name: String,
    pub count: u64,
}

impl FamilyCount {
    pub fn new(name: &str, count: u64) -> Self {
        Self {
            name: name.to_string(),
            count,
        }
    }
}

/// Badge shown next to an activity row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTag {
    High,
    Low,
    Safe,
}

impl ActivityTag {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityTag::High => "HIGH",
            ActivityTag::Low => "LOW",
            ActivityTag::Safe => "SAFE",
        }
    }
}

impl From<Severity> for ActivityTag {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::High => ActivityTag::High,
            Severity::Low => ActivityTag::Low,
        }
    }
}

/// One row of the recent activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRow {
    pub level1: Level1,
    pub family: String,
    pub kind: String,
    pub tag: ActivityTag,
}

impl AlertRow {
    /// Row for an alert. Alerts always describe attacks.
    pub fn from_alert(alert: &Alert) -> Self {
        Self {
            level1: Level1::Attack,
            family: alert.family.clone(),
            kind: alert.kind.clone(),
            tag: alert.severity.into(),
        }
    }

    /// Row for a benign flow.
    pub fn benign(family: &str, kind: &str) -> Self {
        Self {
            level1: Level1::Benign,
            family: family.to_string(),
            kind: kind.to_string(),
            tag: ActivityTag::Safe,
        }
    }
}

/// Headline counters of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub threat_count: u64,
    pub safe_count: u64,
    pub avg_response_label: String,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            threat_count: 0,
            safe_count: 0,
            avg_response_label: AVG_RESPONSE_LABEL.to_string(),
        }
    }
}

impl DashboardStats {
    pub fn from_batch(batch: &SimulationBatch) -> Self {
        Self {
            threat_count: batch.attack_flows,
            safe_count: batch.benign_flows,
            ..Default::default()
        }
    }
}
