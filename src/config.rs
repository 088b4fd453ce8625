//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the predictor address
pub const ADDRESS_ENV: &str = "BURNOUT_PREDICTOR_ADDRESS";

/// Default prediction service address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8000";

/// Default prediction endpoint path
pub const DEFAULT_PREDICT_PATH: &str = "/api/predict";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Prediction service base address
    pub predictor_address: Option<String>,
    /// Path of the prediction endpoint
    pub predict_path: Option<String>,
    /// Request timeout in seconds (no timeout when unset)
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "burnout", "burnout-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration, writing a template with the defaults on first run
    pub fn load_or_init() -> Result<Self> {
        let exists = Self::config_path().is_some_and(|p| p.exists());
        if exists {
            return Self::load();
        }

        let config = Self::template();
        config.save()?;
        tracing::info!("Wrote default config to {:?}", Self::config_path());
        Ok(config)
    }

    /// Config with every default spelled out
    pub fn template() -> Self {
        Self {
            predictor_address: Some(DEFAULT_ADDRESS.to_string()),
            predict_path: Some(DEFAULT_PREDICT_PATH.to_string()),
            request_timeout_secs: Some(30),
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Predictor address: environment, then config file, then default
    pub fn resolved_address(&self) -> String {
        self.address_with_override(std::env::var(ADDRESS_ENV).ok())
    }

    fn address_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.predictor_address.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
    }

    pub fn resolved_predict_path(&self) -> String {
        self.predict_path
            .clone()
            .unwrap_or_else(|| DEFAULT_PREDICT_PATH.to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.predictor_address.is_none());
        assert!(config.predict_path.is_none());
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            predictor_address: Some("http://predictor:8000".to_string()),
            predict_path: Some("/predict".to_string()),
            request_timeout_secs: Some(10),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.predictor_address,
            Some("http://predictor:8000".to_string())
        );
        assert_eq!(parsed.predict_path, Some("/predict".to_string()));
        assert_eq!(parsed.request_timeout_secs, Some(10));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.predictor_address.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"predict_path": "/v2/predict", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.predict_path, Some("/v2/predict".to_string()));
    }

    #[test]
    fn test_address_resolution_order() {
        let config = TuiConfig {
            predictor_address: Some("http://from-file:1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.address_with_override(Some("http://from-env:2".to_string())),
            "http://from-env:2"
        );
        assert_eq!(config.address_with_override(None), "http://from-file:1");
        assert_eq!(
            config.address_with_override(Some("  ".to_string())),
            "http://from-file:1"
        );
        assert_eq!(
            TuiConfig::default().address_with_override(None),
            DEFAULT_ADDRESS
        );
    }

    #[test]
    fn test_predict_path_default() {
        assert_eq!(
            TuiConfig::default().resolved_predict_path(),
            DEFAULT_PREDICT_PATH
        );
    }

    #[test]
    fn test_request_timeout() {
        assert!(TuiConfig::default().request_timeout().is_none());
        let zero = TuiConfig {
            request_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(zero.request_timeout().is_none());
        assert_eq!(
            TuiConfig::template().request_timeout(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }
}
