// IDS Monitor - Controllers
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Per-view state machines driven by gateway responses.

mod analysis;
mod dashboard;
mod state;

#[cfg(test)]
mod fake;

pub use analysis::{AnalysisController, AnalysisView};
pub use dashboard::{DashboardController, DashboardView};
pub use state::Phase;
