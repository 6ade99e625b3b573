// IDS Monitor - Classification Result Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! A single three-level classification verdict.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Level 1 (binary) verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level1 {
    #[serde(rename = "BENIGN")]
    Benign,
    #[serde(rename = "ATTACK")]
    Attack,
}

impl Level1 {
    /// Upper-case label used on the wire and in the activity feed.
    pub fn label(&self) -> &'static str {
        match self {
            Level1::Benign => "BENIGN",
            Level1::Attack => "ATTACK",
        }
    }
}

impl fmt::Display for Level1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Display status of a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Safe,
    Danger,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Safe => "Safe",
            Status::Danger => "Danger",
        }
    }
}

impl From<Level1> for Status {
    fn from(level1: Level1) -> Self {
        match level1 {
            Level1::Benign => Status::Safe,
            Level1::Attack => Status::Danger,
        }
    }
}

/// Verdict for one flow across all three classifier levels.
///
/// `status` is always consistent with `level1`: decoding derives it from
/// `level1` and logs a warning if the payload disagreed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireResult")]
pub struct ClassificationResult {
    #[serde(rename = "Level1")]
    pub level1: Level1,
    /// Attack family (open set). "None" for benign flows.
    #[serde(rename = "Level2")]
    pub level2: String,
    /// Specific attack type (open set). Only meaningful for attacks.
    #[serde(rename = "Level3")]
    pub level3: String,
    #[serde(rename = "Status")]
    pub status: Status,
}

impl ClassificationResult {
    /// Create a result for a benign flow.
    #[cfg(test)]
    pub fn benign() -> Self {
        Self {
            level1: Level1::Benign,
            level2: "None".to_string(),
            level3: "None".to_string(),
            status: Status::Safe,
        }
    }

    /// Create a result for an attack flow.
    #[cfg(test)]
    pub fn attack(family: &str, kind: &str) -> Self {
        Self {
            level1: Level1::Attack,
            level2: family.to_string(),
            level3: kind.to_string(),
            status: Status::Danger,
        }
    }

    pub fn is_attack(&self) -> bool {
        self.level1 == Level1::Attack
    }

    /// The specific attack type, if this flow is an attack.
    pub fn attack_type(&self) -> Option<&str> {
        self.is_attack().then_some(self.level3.as_str())
    }
}

#[derive(Deserialize)]
struct WireResult {
    #[serde(rename = "Level1")]
    level1: Level1,
    #[serde(rename = "Level2", default = "none_label")]
    level2: String,
    #[serde(rename = "Level3", default = "none_label")]
    level3: String,
    #[serde(rename = "Status")]
    status: Option<Status>,
}

fn none_label() -> String {
    "None".to_string()
}

impl From<WireResult> for ClassificationResult {
    fn from(wire: WireResult) -> Self {
        let status = Status::from(wire.level1);
        if let Some(reported) = wire.status {
            if reported != status {
                warn!(
                    "Result status {} contradicts level1 {}, using {}",
                    reported.label(),
                    wire.level1,
                    status.label()
                );
            }
        }

        Self {
            level1: wire.level1,
            level2: wire.level2,
            level3: wire.level3,
            status,
        }
    }
}
