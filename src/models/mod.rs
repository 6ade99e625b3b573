// IDS Monitor - Models
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Data shapes exchanged with the classification service.

mod alert;
mod batch;
mod result;

pub use alert::{Alert, Severity};
pub use batch::{DetectionResponse, SimulationBatch, StatsSummary};
pub use result::{ClassificationResult, Level1, Status};
