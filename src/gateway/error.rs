// IDS Monitor - Gateway Errors
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failure of a call to the classification service.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request could not be made at all.
    #[error("backend unreachable: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// The service answered but the body could not be decoded.
    #[error("invalid response from backend: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Whether the service could not be reached.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, GatewayError::Network(_))
    }

    /// HTTP status of a request error.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GatewayError::InvalidResponse(e.to_string())
        } else {
            GatewayError::Network(e.to_string())
        }
    }
}

/// Client-side input problem. Always corrected before sending.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("flow index is not a number: {0:?}")]
    NotANumber(String),

    #[error("flow index is negative: {0}")]
    NegativeIndex(i64),

    #[error("flow count must be positive, got {0}")]
    FlowCountTooSmall(i64),
}
