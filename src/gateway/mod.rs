// IDS Monitor - Gateway Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Typed access to the external classification service.

mod client;
mod error;
mod validate;

use async_trait::async_trait;

use crate::models::{DetectionResponse, SimulationBatch, StatsSummary};

pub use client::HttpBackend;
pub use error::{GatewayError, ValidationError};
pub use validate::{coerce_flow_count, coerce_index};

/// Default base URL of the classification service.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// HTTP endpoint paths.
pub mod paths {
    pub const DETECT_BY_INDEX: &str = "/api/detect-by-index";
    pub const SIMULATE: &str = "/api/simulate";
    pub const STATS: &str = "/api/stats";
}

/// The three calls the monitor makes against the classification service.
///
/// Calls are independent: nothing is queued, de-duplicated or retried.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Classify the dataset row at `index`.
    async fn detect_by_index(&self, index: u64) -> Result<DetectionResponse, GatewayError>;

    /// Classify `num_flows` randomly drawn rows.
    async fn simulate(&self, num_flows: u32) -> Result<SimulationBatch, GatewayError>;

    /// Fetch the service summary. Used as a liveness probe.
    async fn fetch_stats(&self) -> Result<StatsSummary, GatewayError>;
}
