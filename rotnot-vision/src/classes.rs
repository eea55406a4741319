//! COCO class table and the food vocabulary subset

/// COCO class names (80 classes)
pub const COCO_CLASSES: &[&str] = &[
    "person", "bicycle", "car", "motorcycle", "airplane", "bus", "train", "truck", "boat",
    "traffic light", "fire hydrant", "stop sign", "parking meter", "bench", "bird", "cat",
    "dog", "horse", "sheep", "cow", "elephant", "bear", "zebra", "giraffe", "backpack",
    "umbrella", "handbag", "tie", "suitcase", "frisbee", "skis", "snowboard", "sports ball",
    "kite", "baseball bat", "baseball glove", "skateboard", "surfboard", "tennis racket",
    "bottle", "wine glass", "cup", "fork", "knife", "spoon", "bowl", "banana", "apple",
    "sandwich", "orange", "broccoli", "carrot", "hot dog", "pizza", "donut", "cake", "chair",
    "couch", "potted plant", "bed", "dining table", "toilet", "tv", "laptop", "mouse",
    "remote", "keyboard", "cell phone", "microwave", "oven", "toaster", "sink", "refrigerator",
    "book", "clock", "vase", "scissors", "teddy bear", "hair drier", "toothbrush",
];

/// COCO food classes recognized by RotNot (class_id, name)
pub const FOOD_CLASSES: &[(usize, &str)] = &[
    (46, "banana"),
    (47, "apple"),
    (48, "sandwich"),
    (49, "orange"),
    (50, "broccoli"),
    (51, "carrot"),
    (52, "hot dog"),
    (53, "pizza"),
    (54, "donut"),
    (55, "cake"),
];

/// Map a detector class id to a food name, or None if the class is not part
/// of the food vocabulary.
pub fn food_name(class_id: usize) -> Option<&'static str> {
    FOOD_CLASSES
        .iter()
        .find(|(id, _)| *id == class_id)
        .map(|(_, name)| *name)
}
