// IDS Monitor - Analysis Page
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

use std::fmt::Write;

use crate::controller::AnalysisView;
use crate::models::Status;

pub fn render_analysis(view: &AnalysisView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Manual Analysis");
    let _ = writeln!(out, "{}", view.dataset_hint());
    let _ = writeln!(out, "{}", AnalysisView::range_hint());
    let _ = writeln!(out, "Flow index: {}", view.index);
    if view.index_out_of_range() {
        let _ = writeln!(out, "  (index is past the end of the dataset)");
    }

    if let Some(error) = &view.error_message {
        let _ = writeln!(out, "\n[!] {}", error);
    }

    let Some(result) = &view.result else {
        return out;
    };

    match view.result_index {
        Some(index) => {
            let _ = writeln!(out, "\nDetection Results (flow {})", index);
        }
        None => {
            let _ = writeln!(out, "\nDetection Results");
        }
    }
    let _ = writeln!(out, "  Level 1 (Binary):  {}", result.level1);
    let _ = writeln!(out, "  Level 2 (Family):  {}", result.level2);
    let _ = writeln!(out, "  Level 3 (Type):    {}", result.level3);
    let _ = writeln!(out, "  Status:            {}", result.status.label());

    match (result.status, view.alert()) {
        (Status::Danger, Some(alert)) => {
            let _ = writeln!(out, "\nMalicious Traffic Detected: {}", alert.kind);
        }
        _ => {
            let _ = writeln!(out, "\nTraffic is Benign");
        }
    }

    out
}
