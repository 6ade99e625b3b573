// IDS Monitor - Analysis Controller
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Manual analysis of single dataset flows.

use std::ops::Range;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::state::{Fence, Phase, Ticket};
use crate::config::AppConfig;
use crate::gateway::{coerce_index, Backend, GatewayError};
use crate::models::{Alert, ClassificationResult, DetectionResponse};

/// First dataset row holding an attack flow.
pub const ATTACK_INDEX_START: u64 = 540_814;
/// End (exclusive) of the range random attacks are drawn from.
pub const ATTACK_INDEX_END: u64 = 1_000_000;

const ATTACK_RANGE: Range<u64> = ATTACK_INDEX_START..ATTACK_INDEX_END;

/// Draw a dataset row uniformly from the attack range.
pub fn draw_attack_index<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.gen_range(ATTACK_RANGE)
}

/// Which action issued a detection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Manual,
    RandomAttack,
}

/// An issued detection request: its ticket and the row it asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub ticket: Ticket,
    pub index: u64,
}

/// Everything the analysis view displays.
#[derive(Debug, Clone, Default)]
pub struct AnalysisView {
    pub phase: Phase,
    /// Editable flow index.
    pub index: u64,
    pub result: Option<ClassificationResult>,
    /// Row the displayed result belongs to.
    pub result_index: Option<u64>,
    pub dataset_size: Option<u64>,
    pub error_message: Option<String>,
}

impl AnalysisView {
    /// Dataset size line shown above the index field.
    pub fn dataset_hint(&self) -> String {
        match self.dataset_size {
            Some(size) => format!("Dataset contains {} flows", group_thousands(size)),
            None => "Loading dataset info...".to_string(),
        }
    }

    /// Boundary between benign and attack rows.
    pub fn range_hint() -> String {
        format!(
            "Benign flows: 0-{} | Attack flows: {}+",
            group_thousands(ATTACK_INDEX_START - 1),
            group_thousands(ATTACK_INDEX_START)
        )
    }

    /// Alert for the displayed result, if it is an attack.
    pub fn alert(&self) -> Option<Alert> {
        let index = self.result_index?;
        self.result
            .as_ref()
            .and_then(|result| Alert::from_result(index, result))
    }

    /// Whether the index is past the last row of the dataset.
    pub fn index_out_of_range(&self) -> bool {
        self.dataset_size.is_some_and(|size| self.index >= size)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Controller owning the analysis view.
pub struct AnalysisController {
    backend: Arc<dyn Backend>,
    view: AnalysisView,
    fence: Fence,
    rng: StdRng,
    quiet_random_failures: bool,
}

impl AnalysisController {
    pub fn new(backend: Arc<dyn Backend>, config: &AppConfig) -> Self {
        Self {
            backend,
            view: AnalysisView {
                index: config.default_index,
                ..Default::default()
            },
            fence: Fence::new(),
            rng: StdRng::from_entropy(),
            quiet_random_failures: config.quiet_random_failures,
        }
    }

    /// Replace the randomness used for random-attack draws.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn view(&self) -> &AnalysisView {
        &self.view
    }

    /// Set the index from raw user input. Bad input becomes row 0.
    pub fn set_index_input(&mut self, raw: &str) {
        self.view.index = coerce_index(raw);
    }

    fn begin(&mut self, index: u64) -> Detection {
        self.view.index = index;
        self.view.phase = Phase::Loading;
        self.view.error_message = None;
        Detection {
            ticket: self.fence.issue(),
            index,
        }
    }

    /// Start a manual analysis of `index`.
    pub fn begin_analyze(&mut self, index: u64) -> Detection {
        self.begin(index)
    }

    /// Start a random-attack analysis on a freshly drawn row.
    pub fn begin_random_attack(&mut self) -> Detection {
        let index = draw_attack_index(&mut self.rng);
        self.begin(index)
    }

    pub fn finish_analyze(&mut self, request: Detection, outcome: Result<DetectionResponse, GatewayError>) {
        self.finish(request, Trigger::Manual, outcome);
    }

    pub fn finish_random_attack(&mut self, request: Detection, outcome: Result<DetectionResponse, GatewayError>) {
        self.finish(request, Trigger::RandomAttack, outcome);
    }

    fn finish(&mut self, request: Detection, trigger: Trigger, outcome: Result<DetectionResponse, GatewayError>) {
        let Detection { ticket, index } = request;
        let latest = self.fence.is_latest(ticket);
        if !self.fence.admit(ticket) {
            debug!("Dropping stale detection #{} for index {}", ticket.seq(), index);
            return;
        }

        match outcome {
            Ok(response) => {
                info!("Analysis completed for index {}: {:?}", index, response.result);
                self.view.result = Some(response.result);
                self.view.result_index = Some(index);
                self.view.dataset_size = Some(response.dataset_size);
                if latest {
                    self.view.phase = Phase::Ready;
                }
            }
            Err(e) if !latest => {
                debug!("Ignoring error for superseded detection of index {}: {}", index, e);
            }
            Err(e) if trigger == Trigger::RandomAttack && self.quiet_random_failures => {
                warn!("Random attack error for index {}: {}", index, e);
                self.view.phase = if self.view.result.is_some() { Phase::Ready } else { Phase::Idle };
            }
            Err(e) => {
                warn!("Analysis error for index {}: {}", index, e);
                self.view.error_message = Some(e.to_string());
                self.view.phase = Phase::Error;
            }
        }
    }

    /// Classify the flow at `index`.
    pub async fn run_analyze(&mut self, index: u64) {
        let request = self.begin_analyze(index);
        let outcome = self.backend.detect_by_index(index).await;
        self.finish_analyze(request, outcome);
    }

    /// Classify a flow drawn from the attack range.
    pub async fn run_random_attack(&mut self) {
        let request = self.begin_random_attack();
        let outcome = self.backend.detect_by_index(request.index).await;
        self.finish_random_attack(request, outcome);
    }
}
