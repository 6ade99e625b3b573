// IDS Monitor - Bar Chart Widget
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Horizontal text bar chart for labelled counts.

use std::fmt::Write;

/// Full-width bar character.
const BAR: char = '█';

/// A bar entry for the chart.
#[derive(Debug, Clone)]
pub struct BarEntry {
    pub label: String,
    pub value: u64,
    pub max_value: u64,
}

impl BarEntry {
    pub fn new(label: &str, value: u64, max_value: u64) -> Self {
        Self {
            label: label.to_string(),
            value,
            max_value: max_value.max(1),
        }
    }

    /// Get the normalized value (0.0 to 1.0).
    pub fn normalized(&self) -> f64 {
        (self.value as f64 / self.max_value as f64).clamp(0.0, 1.0)
    }

    /// Bar of at most `width` cells. Non-zero values get at least one cell.
    pub fn bar(&self, width: usize) -> String {
        let mut cells = (self.normalized() * width as f64).round() as usize;
        if self.value > 0 {
            cells = cells.max(1);
        }
        BAR.to_string().repeat(cells.min(width))
    }
}

/// Text bar chart.
#[derive(Debug, Clone)]
pub struct BarChart {
    entries: Vec<BarEntry>,
    width: usize,
    placeholder: String,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            width: 40,
            placeholder: "No data".to_string(),
        }
    }
}

impl BarChart {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set the data from (label, value) pairs. Bars scale to the largest value.
    pub fn set_data(&mut self, data: &[(String, u64)]) {
        let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1);
        self.entries = data
            .iter()
            .map(|(label, value)| BarEntry::new(label, *value, max_value))
            .collect();
    }

    /// Set the placeholder text when there's no data.
    pub fn set_placeholder(&mut self, text: &str) {
        self.placeholder = text.to_string();
    }

    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return format!("  {}\n", self.placeholder);
        }

        let label_width = self.entries.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);
        let mut out = String::new();
        for entry in &self.entries {
            let _ = writeln!(
                out,
                "  {:<label_width$}  {:<bar_width$}  {}",
                entry.label,
                entry.bar(self.width),
                entry.value,
                label_width = label_width,
                bar_width = self.width,
            );
        }
        out
    }
}
