//! Configuration for rotnot-vision

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Path to the ONNX model file
    pub model_path: PathBuf,
    /// Minimum confidence for a detection to be kept
    pub confidence_threshold: f32,
    /// Model input resolution (width, height)
    pub input_size: (u32, u32),
    /// IoU threshold for non-maximum suppression
    pub nms_threshold: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("./models/yolov8n.onnx"),
            confidence_threshold: 0.5,
            input_size: (640, 640),
            nms_threshold: 0.45,
        }
    }
}

impl DetectorConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err("Confidence threshold must be within [0, 1]".to_string());
        }

        if !(0.0..=1.0).contains(&self.nms_threshold) {
            return Err("NMS threshold must be within [0, 1]".to_string());
        }

        if self.input_size.0 == 0 || self.input_size.1 == 0 {
            return Err("Input size must be non-zero".to_string());
        }

        if self.input_size.0 > 4096 || self.input_size.1 > 4096 {
            return Err("Input size too large (max 4096)".to_string());
        }

        Ok(())
    }
}
