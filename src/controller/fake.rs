// IDS Monitor - Test Backend
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! In-memory backend for controller tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::gateway::{Backend, GatewayError};
use crate::models::{Alert, ClassificationResult, DetectionResponse, SimulationBatch, StatsSummary};

pub const DATASET_SIZE: u64 = 1_000_000;

/// How the fake answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Online,
    Offline,
    /// Answers with HTTP 500.
    Broken,
}

pub struct FakeBackend {
    mode: Mutex<Mode>,
    pub detect_calls: Mutex<Vec<u64>>,
    pub simulate_calls: Mutex<Vec<u32>>,
}

impl FakeBackend {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode: Mutex::new(mode),
            detect_calls: Mutex::new(Vec::new()),
            simulate_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_mode(&self, mode: Mode) {
        *self.mode.lock().unwrap() = mode;
    }

    fn check(&self) -> Result<(), GatewayError> {
        match *self.mode.lock().unwrap() {
            Mode::Online => Ok(()),
            Mode::Offline => Err(GatewayError::Network("connection refused".to_string())),
            Mode::Broken => Err(GatewayError::Request {
                status: 500,
                message: "Models or data not loaded".to_string(),
            }),
        }
    }
}

/// The batch from the dashboard walkthrough: 50 flows, 10 attacks.
pub fn sample_batch() -> SimulationBatch {
    let families = [
        ("DoS", "Hulk"),
        ("BruteForce", "SSH-Patator"),
        ("DoS", "GoldenEye"),
        ("WebAttack", "XSS"),
        ("DoS", "Slowloris"),
        ("BruteForce", "FTP-Patator"),
        ("RareAttack", "Heartbleed"),
        ("DoS", "Hulk"),
        ("WebAttack", "SQL Injection"),
        ("BruteForce", "SSH-Patator"),
    ];

    let alerts: Vec<Alert> = families
        .iter()
        .enumerate()
        .map(|(i, (family, kind))| Alert::new(600_000 + i as u64, family, kind))
        .collect();

    let mut results: Vec<ClassificationResult> = families
        .iter()
        .map(|(family, kind)| ClassificationResult::attack(family, kind))
        .collect();
    results.extend(std::iter::repeat(ClassificationResult::benign()).take(40));

    SimulationBatch {
        total_flows: 50,
        benign_flows: 40,
        attack_flows: 10,
        alerts,
        results,
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn detect_by_index(&self, index: u64) -> Result<DetectionResponse, GatewayError> {
        self.detect_calls.lock().unwrap().push(index);
        self.check()?;

        let result = if index >= 540_814 {
            ClassificationResult::attack("DoS", "Hulk")
        } else {
            ClassificationResult::benign()
        };
        Ok(DetectionResponse {
            result,
            dataset_size: DATASET_SIZE,
        })
    }

    async fn simulate(&self, num_flows: u32) -> Result<SimulationBatch, GatewayError> {
        self.simulate_calls.lock().unwrap().push(num_flows);
        self.check()?;
        Ok(sample_batch())
    }

    async fn fetch_stats(&self) -> Result<StatsSummary, GatewayError> {
        self.check()?;
        Ok(StatsSummary::default())
    }
}
