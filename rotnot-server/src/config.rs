//! Server configuration from environment

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
    pub confidence_threshold: f32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            model_path: PathBuf::from("./models/yolov8n.onnx"),
            confidence_threshold: 0.5,
        }
    }
}

impl ServerConfig {
    /// Read configuration from ROTNOT_* environment variables, falling back
    /// to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("ROTNOT_HOST").unwrap_or(defaults.host),
            port: std::env::var("ROTNOT_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            model_path: std::env::var("ROTNOT_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            confidence_threshold: std::env::var("ROTNOT_CONFIDENCE_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.confidence_threshold),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host must not be empty".to_string());
        }

        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err("Confidence threshold must be within [0, 1]".to_string());
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let config = ServerConfig {
            confidence_threshold: -0.1,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_host_rejected() {
        let config = ServerConfig {
            host: String::new(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
