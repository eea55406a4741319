//! Detection aggregation
//!
//! Reduces a batch of per-box detections into one summary per distinct food
//! name: the highest confidence observed and the total occurrence count.

use serde::Serialize;

/// A single (food name, confidence) observation from one detector run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub name: &'static str,
    pub confidence: f32,
}

/// One entry per distinct food name observed in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodSummary {
    pub name: &'static str,
    pub confidence: f32,
    pub count: usize,
}

/// Aggregate raw detections into per-name summaries.
///
/// For each distinct name: `confidence` is the maximum over all matching
/// detections, `count` is the number of matching detections. Output follows
/// first-seen order. Pure function; an empty input yields an empty output.
pub fn aggregate(detections: &[Detection]) -> Vec<FoodSummary> {
    let mut summary: Vec<FoodSummary> = Vec::new();

    for detection in detections {
        match summary.iter_mut().find(|s| s.name == detection.name) {
            Some(entry) => {
                entry.count += 1;
                if detection.confidence > entry.confidence {
                    entry.confidence = detection.confidence;
                }
            }
            None => summary.push(FoodSummary {
                name: detection.name,
                confidence: detection.confidence,
                count: 1,
            }),
        }
    }

    summary
}
