// Trigger evaluation - maps wrist positions to per-light on/off decisions

use crate::core::config::ControllerConfig;
use crate::models::light::LightState;
use crate::models::pose::{KeypointName, Pose, PoseResult};

/// Desired state for both controls after evaluating one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerDecision {
    pub left: LightState,
    pub right: LightState,
}

impl TriggerDecision {
    /// Both controls off; the resolution for frames with no usable pose
    pub fn all_off() -> Self {
        Self {
            left: LightState::Off,
            right: LightState::Off,
        }
    }
}

/// Evaluates detected poses against the wrist-in-corner rule
///
/// The left control triggers when a confident left wrist sits in the
/// top-left quadrant of the frame; the right control when a confident
/// right wrist sits in the top-right quadrant.
pub struct TriggerEvaluator {
    min_pose_confidence: f32,
    min_part_confidence: f32,
    half_width: f32,
    half_height: f32,
}

impl TriggerEvaluator {
    /// Create an evaluator for the configured thresholds and frame size
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            min_pose_confidence: config.min_pose_confidence,
            min_part_confidence: config.min_part_confidence,
            half_width: config.frame_width as f32 / 2.0,
            half_height: config.frame_height as f32 / 2.0,
        }
    }

    /// Evaluate one frame's poses into a per-light decision
    ///
    /// Poses below the pose confidence threshold are ignored; if none
    /// qualify, both controls resolve Off regardless of wrist position.
    /// Any qualifying pose may turn a control on.
    ///
    /// A qualifying pose without a wrist keypoint violates the estimator
    /// contract and surfaces as `PoseError::MissingKeypoint`.
    pub fn evaluate(&self, poses: &[Pose]) -> PoseResult<TriggerDecision> {
        let mut left_on = false;
        let mut right_on = false;

        for pose in poses {
            if pose.score < self.min_pose_confidence {
                continue;
            }

            let left_wrist = pose.require_keypoint(KeypointName::LeftWrist)?;
            if left_wrist.is_confident(self.min_part_confidence)
                && left_wrist.position.x <= self.half_width
                && left_wrist.position.y <= self.half_height
            {
                left_on = true;
            }

            let right_wrist = pose.require_keypoint(KeypointName::RightWrist)?;
            if right_wrist.is_confident(self.min_part_confidence)
                && right_wrist.position.x >= self.half_width
                && right_wrist.position.y <= self.half_height
            {
                right_on = true;
            }
        }

        Ok(TriggerDecision {
            left: LightState::from_trigger(left_on),
            right: LightState::from_trigger(right_on),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pose::{Keypoint, PoseError};

    /// 600x500 frame, 0.6 pose threshold, 0.1 part threshold
    fn test_config() -> ControllerConfig {
        ControllerConfig::default()
    }

    /// Pose with both wrists at the given positions and scores
    fn pose_with_wrists(
        score: f32,
        left: (f32, f32, f32),
        right: (f32, f32, f32),
    ) -> Pose {
        Pose::new(
            score,
            vec![
                Keypoint::new(KeypointName::LeftWrist, left.0, left.1, left.2),
                Keypoint::new(KeypointName::RightWrist, right.0, right.1, right.2),
            ],
        )
    }

    #[test]
    fn test_left_wrist_in_top_left_quadrant_triggers_left() {
        let evaluator = TriggerEvaluator::new(&test_config());
        let pose = pose_with_wrists(0.8, (100.0, 50.0, 0.9), (550.0, 400.0, 0.9));

        let decision = evaluator.evaluate(&[pose]).unwrap();

        assert_eq!(decision.left, LightState::On);
        assert_eq!(decision.right, LightState::Off, "right wrist is below the midline");
    }

    #[test]
    fn test_right_wrist_in_top_right_quadrant_triggers_right() {
        let evaluator = TriggerEvaluator::new(&test_config());
        let pose = pose_with_wrists(0.8, (100.0, 400.0, 0.9), (450.0, 100.0, 0.9));

        let decision = evaluator.evaluate(&[pose]).unwrap();

        assert_eq!(decision.left, LightState::Off, "left wrist is below the midline");
        assert_eq!(decision.right, LightState::On);
    }

    #[test]
    fn test_quadrant_boundary() {
        let evaluator = TriggerEvaluator::new(&test_config());

        // Exactly on the midline counts for both sides
        let pose = pose_with_wrists(0.8, (300.0, 250.0, 0.9), (300.0, 250.0, 0.9));
        let decision = evaluator.evaluate(&[pose]).unwrap();
        assert_eq!(decision.left, LightState::On);
        assert_eq!(decision.right, LightState::On);

        // One pixel past the midline resolves the left control off
        let pose = pose_with_wrists(0.8, (301.0, 250.0, 0.9), (600.0, 500.0, 0.0));
        let decision = evaluator.evaluate(&[pose]).unwrap();
        assert_eq!(decision.left, LightState::Off);
    }

    #[test]
    fn test_low_pose_confidence_resolves_both_off() {
        let evaluator = TriggerEvaluator::new(&test_config());

        // Wrists are in triggering positions but the pose itself is weak
        let pose = pose_with_wrists(0.5, (100.0, 50.0, 0.9), (450.0, 100.0, 0.9));

        let decision = evaluator.evaluate(&[pose]).unwrap();
        assert_eq!(decision, TriggerDecision::all_off());
    }

    #[test]
    fn test_low_part_confidence_does_not_trigger() {
        let evaluator = TriggerEvaluator::new(&test_config());
        let pose = pose_with_wrists(0.8, (100.0, 50.0, 0.05), (450.0, 100.0, 0.05));

        let decision = evaluator.evaluate(&[pose]).unwrap();
        assert_eq!(decision, TriggerDecision::all_off());
    }

    #[test]
    fn test_no_poses_resolves_both_off() {
        let evaluator = TriggerEvaluator::new(&test_config());
        let decision = evaluator.evaluate(&[]).unwrap();
        assert_eq!(decision, TriggerDecision::all_off());
    }

    #[test]
    fn test_any_qualifying_pose_can_trigger() {
        let evaluator = TriggerEvaluator::new(&test_config());
        let weak = pose_with_wrists(0.3, (100.0, 50.0, 0.9), (450.0, 100.0, 0.9));
        let strong = pose_with_wrists(0.9, (100.0, 50.0, 0.9), (450.0, 400.0, 0.9));

        let decision = evaluator.evaluate(&[weak, strong]).unwrap();
        assert_eq!(decision.left, LightState::On);
        assert_eq!(decision.right, LightState::Off);
    }

    #[test]
    fn test_missing_wrist_keypoint_is_fatal() {
        let evaluator = TriggerEvaluator::new(&test_config());

        // Qualifying pose with no wrist keypoints at all
        let pose = Pose::new(0.8, vec![Keypoint::new(KeypointName::Nose, 0.0, 0.0, 0.9)]);

        let result = evaluator.evaluate(&[pose]);
        assert!(matches!(result, Err(PoseError::MissingKeypoint(_))));
    }

    #[test]
    fn test_below_threshold_pose_may_omit_keypoints() {
        let evaluator = TriggerEvaluator::new(&test_config());

        // Poses we never consider are not held to the keypoint contract
        let pose = Pose::new(0.2, vec![]);

        let decision = evaluator.evaluate(&[pose]).unwrap();
        assert_eq!(decision, TriggerDecision::all_off());
    }
}
