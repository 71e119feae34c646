//! Detector model selection.
//!
//! The server ships several detection models; the client names one of them
//! in the `detector` field of a video upload. The server default is YOLO.

use serde::{Deserialize, Serialize};

/// Detection model to run on an uploaded video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    /// YOLOv5-based detector, the server default.
    #[default]
    Yolo,
    /// ResNet-based detector.
    Resnet,
    /// MobileNet-based detector.
    Mobilenet,
    /// Faster R-CNN detector.
    Rcnn,
    /// Temporal detector working across frames.
    Temporal,
}

impl DetectorKind {
    /// Returns the wire name sent in the multipart `detector` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorKind::Yolo => "yolo",
            DetectorKind::Resnet => "resnet",
            DetectorKind::Mobilenet => "mobilenet",
            DetectorKind::Rcnn => "rcnn",
            DetectorKind::Temporal => "temporal",
        }
    }
}

impl std::fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DetectorKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yolo" => Ok(DetectorKind::Yolo),
            "resnet" => Ok(DetectorKind::Resnet),
            "mobilenet" => Ok(DetectorKind::Mobilenet),
            "rcnn" => Ok(DetectorKind::Rcnn),
            "temporal" => Ok(DetectorKind::Temporal),
            _ => Err(format!("Unknown detector: {}", s)),
        }
    }
}
