// IDS Monitor - Statistics Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Aggregation of simulation batches into dashboard series.

mod aggregate;
pub mod models;
pub mod placeholder;

pub use aggregate::{bucketize_traffic, group_by_family, to_recent_alerts, RECENT_ALERT_LIMIT};
pub use models::{AlertRow, DashboardStats, FamilyCount, TrafficBucket};
