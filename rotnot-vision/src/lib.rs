//! rotnot-vision: food detection for RotNot
//!
//! Wraps an object detector behind a trait seam, restricts its output to the
//! food vocabulary, and reduces per-box detections into one summary entry
//! per food name.

pub mod aggregate;
pub mod classes;
pub mod config;
pub mod decode;
pub mod detector;
pub mod error;

#[cfg(feature = "onnx")]
pub mod yolo;

pub use aggregate::{aggregate, Detection, FoodSummary};
pub use image::DynamicImage;
pub use config::DetectorConfig;
pub use detector::{food_detections, ObjectDetector, RawDetection};
pub use error::VisionError;

#[cfg(feature = "onnx")]
pub use yolo::YoloDetector;
