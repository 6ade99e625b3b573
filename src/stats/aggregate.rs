// IDS Monitor - Aggregation
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Pure functions turning a simulation batch into chart data.

use std::collections::HashMap;

use rand::Rng;

use super::models::{AlertRow, FamilyCount, TrafficBucket, TIME_LABELS};
use crate::models::Alert;

/// Maximum number of rows in the recent activity feed.
pub const RECENT_ALERT_LIMIT: usize = 10;

/// Spread flow totals over the six display buckets.
///
/// Each bucket gets a sixth of each total scaled by an independent factor in
/// `[0.8, 1.2)` and floored. The result is a plausible shape for the chart,
/// bucket sums do not necessarily match the totals.
pub fn bucketize_traffic<R: Rng + ?Sized>(
    attack_flows: u64,
    benign_flows: u64,
    rng: &mut R,
) -> Vec<TrafficBucket> {
    let share = |total: u64, rng: &mut R| -> u64 {
        let factor: f64 = rng.gen_range(0.8..1.2);
        (total as f64 / TIME_LABELS.len() as f64 * factor).floor() as u64
    };

    TIME_LABELS
        .iter()
        .map(|&label| {
            let attacks = share(attack_flows, rng);
            let benign = share(benign_flows, rng);
            TrafficBucket::new(label, attacks, benign)
        })
        .collect()
}

/// Count alerts per family, in order of first appearance.
pub fn group_by_family(alerts: &[Alert]) -> Vec<FamilyCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<FamilyCount> = Vec::new();

    for alert in alerts {
        match positions.get(alert.family.as_str()) {
            Some(&pos) => counts[pos].count += 1,
            None => {
                positions.insert(alert.family.as_str(), counts.len());
                counts.push(FamilyCount::new(&alert.family, 1));
            }
        }
    }

    counts
}

/// The first `limit` alerts as activity rows, in batch order.
pub fn to_recent_alerts(alerts: &[Alert], limit: usize) -> Vec<AlertRow> {
    alerts.iter().take(limit).map(AlertRow::from_alert).collect()
}
