pub mod core;
pub mod models;
pub mod platform;

pub use crate::core::config::ControllerConfig;
pub use crate::core::lights::{LightController, StatePublisher};
pub use crate::core::pipeline::{
    FrameSource, PipelineError, PipelineResult, PoseLightSession, PoseSource, SessionHandle,
};
pub use crate::core::trigger::{TriggerDecision, TriggerEvaluator};
pub use crate::models::frame::{FrameError, FrameResult, PixelFormat, VideoFrame};
pub use crate::models::light::{LightCommand, LightState, PublishError, PublishResult};
pub use crate::models::pose::{Keypoint, KeypointName, Point2D, Pose, PoseError, PoseResult};
pub use crate::platform::mqtt::MqttPublisher;
