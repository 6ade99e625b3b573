// IDS Monitor - Line Chart Widget
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Two-series text chart for bucketed traffic.

use std::fmt::Write;

use super::bar_chart::BarEntry;

/// A data series for the line chart.
#[derive(Debug, Clone)]
pub struct DataSeries {
    pub label: String,
    pub values: Vec<u64>,
}

impl DataSeries {
    pub fn new(label: &str, values: Vec<u64>) -> Self {
        Self {
            label: label.to_string(),
            values,
        }
    }
}

/// One row per time label, one bar per series. All series share the scale.
#[derive(Debug, Clone, Default)]
pub struct LineChart {
    labels: Vec<String>,
    series: Vec<DataSeries>,
    width: usize,
}

impl LineChart {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn set_series(&mut self, labels: Vec<String>, series: Vec<DataSeries>) {
        self.labels = labels;
        self.series = series;
    }

    pub fn render(&self) -> String {
        let max_value = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .max()
            .unwrap_or(1);
        let series_width = self.series.iter().map(|s| s.label.len()).max().unwrap_or(0);

        let mut out = String::new();
        for (i, label) in self.labels.iter().enumerate() {
            for (n, series) in self.series.iter().enumerate() {
                let value = series.values.get(i).copied().unwrap_or(0);
                let entry = BarEntry::new(&series.label, value, max_value);
                let prefix = if n == 0 { label.as_str() } else { "" };
                let _ = writeln!(
                    out,
                    "  {:<5}  {:<series_width$}  {:<bar_width$}  {}",
                    prefix,
                    series.label,
                    entry.bar(self.width),
                    value,
                    series_width = series_width,
                    bar_width = self.width,
                );
            }
        }
        out
    }
}
