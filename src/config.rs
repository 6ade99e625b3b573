// IDS Monitor - Configuration
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Process-wide configuration, resolved once at startup from an optional
//! JSON settings file and the environment.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::gateway::DEFAULT_API_URL;

/// Environment variable overriding the service base URL.
pub const API_URL_ENV: &str = "IDS_API_URL";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Monitor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the classification service.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Flows requested per dashboard simulation.
    #[serde(default = "default_simulate_flows")]
    pub simulate_flows: u32,
    /// Flow index shown when the analysis view opens.
    #[serde(default = "default_index")]
    pub default_index: u64,
    /// Keep random-attack failures out of the analysis view (logged only).
    #[serde(default)]
    pub quiet_random_failures: bool,
    /// Seconds between simulations in watch mode.
    #[serde(default = "default_watch_interval")]
    pub watch_interval_secs: u64,
}

fn default_api_url() -> String { DEFAULT_API_URL.to_string() }
fn default_simulate_flows() -> u32 { 50 }
fn default_index() -> u64 { 540_822 }
fn default_watch_interval() -> u64 { 5 }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            simulate_flows: default_simulate_flows(),
            default_index: default_index(),
            quiet_random_failures: false,
            watch_interval_secs: default_watch_interval(),
        }
    }
}

impl AppConfig {
    /// Load from the settings file and the environment.
    pub fn load() -> Self {
        let path = Self::settings_path();
        let content = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => Some(content),
                Err(e) => {
                    warn!("Failed to read settings: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self::from_sources(content.as_deref(), env::var(API_URL_ENV).ok())
    }

    /// Build from settings file content and an environment override.
    pub fn from_sources(file: Option<&str>, env_url: Option<String>) -> Self {
        let mut config = match file {
            Some(content) => match serde_json::from_str(content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse settings: {}", e);
                    AppConfig::default()
                }
            },
            None => AppConfig::default(),
        };

        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            debug!("Using {} from {}", url, API_URL_ENV);
            config.api_url = url;
        }

        config
    }

    /// Location of the optional settings file.
    pub fn settings_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ids-monitor")
            .join("settings.json")
    }
}

/// Install the process-wide configuration. The first call wins.
pub fn init(config: AppConfig) -> &'static AppConfig {
    CONFIG.get_or_init(|| config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_sources(None, None);
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.simulate_flows, 50);
        assert_eq!(config.default_index, 540822);
        assert!(!config.quiet_random_failures);
        assert_eq!(config.watch_interval_secs, 5);
    }

    #[test]
    fn test_partial_settings_file() {
        let config = AppConfig::from_sources(Some(r#"{"simulate_flows": 200, "quiet_random_failures": true}"#), None);
        assert_eq!(config.simulate_flows, 200);
        assert!(config.quiet_random_failures);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_env_overrides_file() {
        let config = AppConfig::from_sources(
            Some(r#"{"api_url": "http://ids.lan:5000"}"#),
            Some("http://10.0.0.5:8080".to_string()),
        );
        assert_eq!(config.api_url, "http://10.0.0.5:8080");

        let config = AppConfig::from_sources(Some(r#"{"api_url": "http://ids.lan:5000"}"#), Some("  ".to_string()));
        assert_eq!(config.api_url, "http://ids.lan:5000");
    }

    #[test]
    fn test_broken_settings_file_falls_back() {
        let config = AppConfig::from_sources(Some("{ not json"), None);
        assert_eq!(config, AppConfig::default());
    }
}
