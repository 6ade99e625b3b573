// IDS Monitor - UI Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Terminal rendering of the controller views.

mod analysis_page;
mod dashboard_page;
mod widgets;

pub use analysis_page::render_analysis;
pub use dashboard_page::render_dashboard;
