// IDS Monitor - Batch Models
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Response bodies of the detection and simulation endpoints.

use serde::{Deserialize, Serialize};

use super::{Alert, ClassificationResult};

/// Response of `POST /api/detect-by-index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub result: ClassificationResult,
    pub dataset_size: u64,
}

/// Response of `POST /api/simulate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationBatch {
    pub total_flows: u64,
    pub benign_flows: u64,
    pub attack_flows: u64,
    /// Alerts in generation order.
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub results: Vec<ClassificationResult>,
}

impl SimulationBatch {
    /// Check the flow counters add up.
    pub fn is_consistent(&self) -> bool {
        self.benign_flows.checked_add(self.attack_flows) == Some(self.total_flows)
    }
}

/// Response of `GET /api/stats`. Only used as a liveness probe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub threats: Option<u64>,
    #[serde(default)]
    pub safe: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default, rename = "avgResponse")]
    pub avg_response: Option<String>,
}
