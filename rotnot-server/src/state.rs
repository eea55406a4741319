//! Shared request state with lazily-constructed process-wide handles
//!
//! Both the detector and the generation client are built at most once per
//! process on first use, then shared read-only across concurrent requests.

use crate::config::ServerConfig;
use rotnot_llm::{GenerationClient, LlmError};
use rotnot_recipes::RecipeGenerator;
use rotnot_vision::{ObjectDetector, VisionError};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    detector: Arc<OnceCell<Arc<dyn ObjectDetector>>>,
    generator: Arc<OnceCell<Arc<RecipeGenerator>>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            detector: Arc::new(OnceCell::new()),
            generator: Arc::new(OnceCell::new()),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Whether the detector handle has been constructed yet
    pub fn detector_loaded(&self) -> bool {
        self.detector.initialized()
    }

    /// Get the object detector, constructing it on first use.
    pub async fn detector(&self) -> Result<Arc<dyn ObjectDetector>, VisionError> {
        let config = self.config.clone();
        self.detector
            .get_or_try_init(|| async move { build_detector(&config) })
            .await
            .cloned()
    }

    /// Get the recipe generator, constructing its generation client from the
    /// environment on first use.
    pub async fn generator(&self) -> Result<Arc<RecipeGenerator>, LlmError> {
        self.generator
            .get_or_try_init(|| async {
                let client = GenerationClient::from_env()?;
                info!("Generation client ready ({})", client.provider_name());
                Ok(Arc::new(RecipeGenerator::new(client)))
            })
            .await
            .cloned()
    }
}

#[cfg(feature = "onnx")]
fn build_detector(config: &ServerConfig) -> Result<Arc<dyn ObjectDetector>, VisionError> {
    let detector_config = rotnot_vision::DetectorConfig {
        model_path: config.model_path.clone(),
        confidence_threshold: config.confidence_threshold,
        ..Default::default()
    };
    let detector = rotnot_vision::YoloDetector::new(detector_config)?;
    Ok(Arc::new(detector))
}

#[cfg(not(feature = "onnx"))]
fn build_detector(_config: &ServerConfig) -> Result<Arc<dyn ObjectDetector>, VisionError> {
    Err(VisionError::Model(
        "server built without ONNX detector support (enable the `onnx` feature)".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_with_no_handles() {
        let state = AppState::new(ServerConfig::default());
        assert!(!state.detector_loaded());
    }

    #[tokio::test]
    async fn test_generator_init_failure_is_not_cached_as_success() {
        // Without any API key in the environment the generator cannot be
        // constructed; the handle must stay uninitialized so a later attempt
        // can retry instead of serving a cached failure.
        std::env::remove_var("HF_TOKEN");
        std::env::remove_var("OPENAI_API_KEY");
        let state = AppState::new(ServerConfig::default());
        assert!(state.generator().await.is_err());
        assert!(!state.generator.initialized());
        assert!(state.generator().await.is_err());
    }
}
