// Data models for pose estimation results

use serde::{Deserialize, Serialize};

// ==============================================================================
// Keypoints (17-point set)
// ==============================================================================

/// Named body keypoints reported by the pose estimator (PoseNet's 17-point set)
///
/// Serialized with the estimator's camelCase wire names, e.g. `leftWrist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeypointName {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl KeypointName {
    /// Wire name as emitted by the estimator
    pub fn as_str(&self) -> &'static str {
        match self {
            KeypointName::Nose => "nose",
            KeypointName::LeftEye => "leftEye",
            KeypointName::RightEye => "rightEye",
            KeypointName::LeftEar => "leftEar",
            KeypointName::RightEar => "rightEar",
            KeypointName::LeftShoulder => "leftShoulder",
            KeypointName::RightShoulder => "rightShoulder",
            KeypointName::LeftElbow => "leftElbow",
            KeypointName::RightElbow => "rightElbow",
            KeypointName::LeftWrist => "leftWrist",
            KeypointName::RightWrist => "rightWrist",
            KeypointName::LeftHip => "leftHip",
            KeypointName::RightHip => "rightHip",
            KeypointName::LeftKnee => "leftKnee",
            KeypointName::RightKnee => "rightKnee",
            KeypointName::LeftAnkle => "leftAnkle",
            KeypointName::RightAnkle => "rightAnkle",
        }
    }
}

impl std::fmt::Display for KeypointName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 2D position in frame coordinates (pixels, origin at top-left)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single detected keypoint with its confidence score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    #[serde(rename = "part")]
    pub name: KeypointName,
    pub position: Point2D,
    pub score: f32,
}

impl Keypoint {
    pub fn new(name: KeypointName, x: f32, y: f32, score: f32) -> Self {
        Self {
            name,
            position: Point2D::new(x, y),
            score,
        }
    }

    /// Check if this keypoint's confidence meets the given threshold
    pub fn is_confident(&self, min_part_confidence: f32) -> bool {
        self.score >= min_part_confidence
    }
}

// ==============================================================================
// Pose
// ==============================================================================

/// A single detected pose: overall confidence plus the full keypoint set
///
/// Produced once per frame by the estimator and discarded after the frame
/// is processed. The estimator is contracted to supply all 17 keypoints
/// for every pose it reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub score: f32,
    pub keypoints: Vec<Keypoint>,
}

impl Pose {
    pub fn new(score: f32, keypoints: Vec<Keypoint>) -> Self {
        Self { score, keypoints }
    }

    /// Look up a keypoint by name
    pub fn keypoint(&self, name: KeypointName) -> Option<&Keypoint> {
        self.keypoints.iter().find(|kp| kp.name == name)
    }

    /// Look up a keypoint the estimator is contracted to supply
    ///
    /// Absence is a contract violation by the pose source, not a normal
    /// low-confidence detection; the caller should treat it as fatal.
    pub fn require_keypoint(&self, name: KeypointName) -> PoseResult<&Keypoint> {
        self.keypoint(name)
            .ok_or(PoseError::MissingKeypoint(name))
    }
}

// ==============================================================================
// Errors
// ==============================================================================

/// Error types for pose estimation and evaluation
#[derive(Debug, thiserror::Error)]
pub enum PoseError {
    #[error("Pose is missing required keypoint: {0}")]
    MissingKeypoint(KeypointName),

    #[error("Inference failed: {0}")]
    InferenceFailed(String),

    #[error("Pose estimator not available: {0}")]
    EstimatorUnavailable(String),
}

pub type PoseResult<T> = Result<T, PoseError>;
