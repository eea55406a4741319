//! Object detector seam and food vocabulary filter

use crate::aggregate::Detection;
use crate::classes::food_name;
use crate::error::Result;
use image::DynamicImage;
use tracing::debug;

/// A single raw detection from the underlying model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDetection {
    pub class_id: usize,
    pub confidence: f32,
    /// Bounding box in pixel coordinates: x, y, width, height
    pub bbox: (f32, f32, f32, f32),
}

/// Object detector interface.
///
/// Implementations apply their own confidence threshold; callers never
/// re-filter by confidence. Detection is a blocking, single-step call.
pub trait ObjectDetector: Send + Sync {
    /// Detector name for logs and health reporting
    fn name(&self) -> &'static str;

    /// Detect objects in a decoded image
    fn detect(&self, image: &DynamicImage) -> Result<Vec<RawDetection>>;
}

/// Restrict raw detections to the food vocabulary.
///
/// Non-food classes and non-finite confidence values are discarded;
/// confidences are rounded to 3 decimals.
pub fn food_detections(raw: &[RawDetection]) -> Vec<Detection> {
    let foods: Vec<Detection> = raw
        .iter()
        .filter(|d| d.confidence.is_finite())
        .filter_map(|d| {
            food_name(d.class_id).map(|name| Detection {
                name,
                confidence: (d.confidence * 1000.0).round() / 1000.0,
            })
        })
        .collect();

    debug!("{} of {} detections are food items", foods.len(), raw.len());
    foods
}
