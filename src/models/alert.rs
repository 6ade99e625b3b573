// IDS Monitor - Alert Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Display-oriented summary of one attack-classified flow.

use serde::{Deserialize, Deserializer, Serialize};

use super::ClassificationResult;

/// Alert severity tier.
///
/// The classification service does not grade alerts, so every alert is
/// `High` unless the payload supplies a recognized tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    High,
    Low,
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("low") => Severity::Low,
            _ => Severity::High,
        })
    }
}

/// An attack alert produced by a simulation batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Row index of the flow in the source dataset.
    pub index: u64,
    pub family: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub severity: Severity,
}

impl Alert {
    pub fn new(index: u64, family: &str, kind: &str) -> Self {
        Self {
            index,
            family: family.to_string(),
            kind: kind.to_string(),
            severity: Severity::High,
        }
    }

    /// Derive an alert from a result. Returns `None` for benign flows.
    pub fn from_result(index: u64, result: &ClassificationResult) -> Option<Self> {
        result
            .attack_type()
            .map(|kind| Self::new(index, &result.level2, kind))
    }
}
