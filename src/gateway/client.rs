// IDS Monitor - HTTP Gateway
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! reqwest client for the classification service.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{paths, Backend, GatewayError};
use crate::models::{DetectionResponse, SimulationBatch, StatsSummary};

/// Body of `POST /api/detect-by-index`.
#[derive(Debug, Serialize)]
struct IndexRequest {
    index: u64,
}

/// Body of `POST /api/simulate`.
#[derive(Debug, Serialize)]
struct SimulateRequest {
    num_flows: u32,
}

/// Error body of a non-success response. FastAPI reports `detail`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Some(error);
        }
        match self.detail? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Client for the classification service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the service at `base_url`.
    ///
    /// No request timeout is set; the transport defaults apply.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, GatewayError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            warn!("POST {} failed: {}", url, e);
            GatewayError::Network(e.to_string())
        })?;

        decode(response, fallback).await
    }
}

/// Turn a response into `T`, or into a request error carrying the
/// server-supplied message.
async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, GatewayError> {
    let status = response.status();

    if !status.is_success() {
        let body: ErrorBody = response.json().await.unwrap_or_default();
        let message = body.into_message().unwrap_or_else(|| fallback.to_string());
        warn!("Backend returned HTTP {}: {}", status, message);
        return Err(GatewayError::Request {
            status: status.as_u16(),
            message,
        });
    }

    response.json::<T>().await.map_err(|e| {
        warn!("Failed to decode backend response: {}", e);
        GatewayError::from(e)
    })
}

#[async_trait]
impl Backend for HttpBackend {
    async fn detect_by_index(&self, index: u64) -> Result<DetectionResponse, GatewayError> {
        self.post_json(paths::DETECT_BY_INDEX, &IndexRequest { index }, "Analysis failed")
            .await
    }

    async fn simulate(&self, num_flows: u32) -> Result<SimulationBatch, GatewayError> {
        self.post_json(paths::SIMULATE, &SimulateRequest { num_flows }, "Simulation failed")
            .await
    }

    async fn fetch_stats(&self) -> Result<StatsSummary, GatewayError> {
        let url = self.endpoint(paths::STATS);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("GET {} failed: {}", url, e);
            GatewayError::Network(e.to_string())
        })?;

        decode(response, "Stats request failed").await
    }
}
