// IDS Monitor - Widgets Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Text chart widgets.

mod bar_chart;
mod line_chart;

pub use bar_chart::BarChart;
pub use line_chart::{DataSeries, LineChart};
