// IDS Monitor - Placeholder Data
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Sample chart data shown until the first simulation completes.

use super::models::{AlertRow, FamilyCount, TrafficBucket, TIME_LABELS};
use crate::models::Alert;

pub fn traffic() -> Vec<TrafficBucket> {
    const SAMPLE: [(u64, u64); 6] = [(12, 89), (19, 95), (8, 76), (25, 102), (15, 88), (22, 98)];

    TIME_LABELS
        .iter()
        .zip(SAMPLE)
        .map(|(&label, (attacks, benign))| TrafficBucket::new(label, attacks, benign))
        .collect()
}

pub fn families() -> Vec<FamilyCount> {
    vec![
        FamilyCount::new("DoS", 34),
        FamilyCount::new("BruteForce", 28),
        FamilyCount::new("WebAttack", 15),
        FamilyCount::new("RareAttack", 7),
    ]
}

pub fn activity() -> Vec<AlertRow> {
    vec![
        AlertRow::from_alert(&Alert::new(0, "DoS", "SynFlood")),
        AlertRow::benign("Normal", "HTTP"),
        AlertRow::from_alert(&Alert::new(0, "BruteForce", "SSHAttack")),
        AlertRow::benign("Normal", "HTTPS"),
    ]
}
