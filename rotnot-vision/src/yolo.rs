//! ONNX-backed YOLO food detector
//!
//! Runs a YOLOv8 model through ONNX Runtime. Output layout is
//! `[1, 4 + num_classes, num_anchors]` with box coordinates in input-space
//! pixels; class score already folds in objectness.

use crate::config::DetectorConfig;
use crate::detector::{ObjectDetector, RawDetection};
use crate::error::{Result, VisionError};
use image::{imageops::FilterType, DynamicImage};
use ndarray::Array4;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use parking_lot::Mutex;
use tracing::{debug, info};

pub struct YoloDetector {
    session: Mutex<Session>,
    config: DetectorConfig,
}

impl YoloDetector {
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate().map_err(VisionError::Config)?;

        if !config.model_path.exists() {
            return Err(VisionError::Model(format!(
                "Model file not found: {}",
                config.model_path.display()
            )));
        }

        let session = Session::builder()
            .and_then(|b| b.with_optimization_level(GraphOptimizationLevel::Level3))
            .and_then(|b| b.commit_from_file(&config.model_path))
            .map_err(|e| VisionError::Model(format!("Failed to load YOLO model: {}", e)))?;

        info!("YOLO model loaded from {}", config.model_path.display());

        Ok(Self {
            session: Mutex::new(session),
            config,
        })
    }

    /// Resize to model input, normalize to [0, 1], layout as NCHW.
    fn preprocess(&self, image: &DynamicImage) -> Array4<f32> {
        let (width, height) = self.config.input_size;
        let resized = image
            .resize_exact(width, height, FilterType::Triangle)
            .to_rgb8();

        let mut input = Array4::<f32>::zeros((1, 3, height as usize, width as usize));
        for (x, y, pixel) in resized.enumerate_pixels() {
            for channel in 0..3 {
                input[[0, channel, y as usize, x as usize]] =
                    f32::from(pixel.0[channel]) / 255.0;
            }
        }
        input
    }

    fn postprocess(
        &self,
        output: &ndarray::ArrayViewD<'_, f32>,
        original_size: (u32, u32),
    ) -> Vec<RawDetection> {
        let shape = output.shape();
        if shape.len() != 3 || shape[1] <= 4 {
            debug!("Unexpected YOLO output shape: {:?}", shape);
            return Vec::new();
        }

        let num_classes = shape[1] - 4;
        let num_anchors = shape[2];
        let (input_w, input_h) = self.config.input_size;
        let scale_x = original_size.0 as f32 / input_w as f32;
        let scale_y = original_size.1 as f32 / input_h as f32;

        let mut detections = Vec::new();
        for anchor in 0..num_anchors {
            let mut best_class = 0;
            let mut best_score = 0.0f32;
            for class in 0..num_classes {
                let score = output[[0, 4 + class, anchor]];
                if score > best_score {
                    best_score = score;
                    best_class = class;
                }
            }

            if !best_score.is_finite() || best_score < self.config.confidence_threshold {
                continue;
            }

            let cx = output[[0, 0, anchor]];
            let cy = output[[0, 1, anchor]];
            let w = output[[0, 2, anchor]];
            let h = output[[0, 3, anchor]];
            if ![cx, cy, w, h].iter().all(|v| v.is_finite()) || w <= 0.0 || h <= 0.0 {
                continue;
            }

            detections.push(RawDetection {
                class_id: best_class,
                confidence: best_score,
                bbox: (
                    (cx - w / 2.0) * scale_x,
                    (cy - h / 2.0) * scale_y,
                    w * scale_x,
                    h * scale_y,
                ),
            });
        }

        apply_nms(detections, self.config.nms_threshold)
    }
}

impl ObjectDetector for YoloDetector {
    fn name(&self) -> &'static str {
        "yolo-onnx"
    }

    fn detect(&self, image: &DynamicImage) -> Result<Vec<RawDetection>> {
        let input = self.preprocess(image);

        let tensor = Tensor::from_array(input)
            .map_err(|e| VisionError::Model(format!("Failed to build input tensor: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(|e| VisionError::Model(format!("YOLO inference failed: {}", e)))?;

        let output = outputs[0]
            .try_extract_array::<f32>()
            .map_err(|e| VisionError::Model(format!("Failed to extract output tensor: {}", e)))?;

        let detections = self.postprocess(&output.view(), (image.width(), image.height()));
        debug!("YOLO detected {} objects", detections.len());
        Ok(detections)
    }
}

/// Non-maximum suppression over same-class detections.
fn apply_nms(mut detections: Vec<RawDetection>, iou_threshold: f32) -> Vec<RawDetection> {
    detections.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut keep: Vec<RawDetection> = Vec::new();
    for candidate in detections {
        let overlaps = keep.iter().any(|kept| {
            kept.class_id == candidate.class_id
                && compute_iou(&kept.bbox, &candidate.bbox) > iou_threshold
        });
        if !overlaps {
            keep.push(candidate);
        }
    }
    keep
}

fn compute_iou(a: &(f32, f32, f32, f32), b: &(f32, f32, f32, f32)) -> f32 {
    let (ax, ay, aw, ah) = *a;
    let (bx, by, bw, bh) = *b;
    if aw <= 0.0 || ah <= 0.0 || bw <= 0.0 || bh <= 0.0 {
        return 0.0;
    }

    let inter_x_min = ax.max(bx);
    let inter_y_min = ay.max(by);
    let inter_x_max = (ax + aw).min(bx + bw);
    let inter_y_max = (ay + ah).min(by + bh);

    if inter_x_max <= inter_x_min || inter_y_max <= inter_y_min {
        return 0.0;
    }

    let inter = (inter_x_max - inter_x_min) * (inter_y_max - inter_y_min);
    let union = aw * ah + bw * bh - inter;
    if union <= 0.0 || !union.is_finite() {
        return 0.0;
    }

    (inter / union).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(class_id: usize, confidence: f32, bbox: (f32, f32, f32, f32)) -> RawDetection {
        RawDetection {
            class_id,
            confidence,
            bbox,
        }
    }

    #[test]
    fn test_iou_identical_boxes() {
        let b = (10.0, 10.0, 20.0, 20.0);
        assert_eq!(compute_iou(&b, &b), 1.0);
    }

    #[test]
    fn test_iou_disjoint_boxes() {
        assert_eq!(
            compute_iou(&(0.0, 0.0, 5.0, 5.0), &(100.0, 100.0, 5.0, 5.0)),
            0.0
        );
    }

    #[test]
    fn test_nms_suppresses_overlapping_same_class() {
        let detections = vec![
            boxed(46, 0.9, (10.0, 10.0, 20.0, 20.0)),
            boxed(46, 0.6, (11.0, 11.0, 20.0, 20.0)),
        ];
        let kept = apply_nms(detections, 0.45);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].confidence, 0.9);
    }

    #[test]
    fn test_nms_keeps_overlapping_different_classes() {
        let detections = vec![
            boxed(46, 0.9, (10.0, 10.0, 20.0, 20.0)),
            boxed(47, 0.8, (11.0, 11.0, 20.0, 20.0)),
        ];
        assert_eq!(apply_nms(detections, 0.45).len(), 2);
    }

    #[test]
    fn test_missing_model_file_errors() {
        let config = DetectorConfig {
            model_path: "/nonexistent/model.onnx".into(),
            ..DetectorConfig::default()
        };
        let err = YoloDetector::new(config).unwrap_err();
        match err {
            VisionError::Model(msg) => assert!(msg.contains("not found")),
            _ => panic!("Expected Model error"),
        }
    }
}
