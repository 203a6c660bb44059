// Frame pipeline - drives estimate → evaluate → publish once per frame

use crate::core::config::ControllerConfig;
use crate::core::lights::{LightController, StatePublisher};
use crate::core::trigger::{TriggerDecision, TriggerEvaluator};
use crate::models::frame::{FrameError, FrameResult, VideoFrame};
use crate::models::pose::{Pose, PoseError, PoseResult};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Source of webcam frames
///
/// Stands in for the browser's video element; implementations wrap a real
/// camera or replay recorded frames.
#[async_trait]
pub trait FrameSource: Send {
    /// Produce the next frame, or `FrameError::Exhausted` when done
    async fn next_frame(&mut self) -> FrameResult<VideoFrame>;
}

/// External pose estimator
///
/// Contracted to supply the full keypoint set for every pose it reports.
#[async_trait]
pub trait PoseSource: Send {
    /// Run inference on one frame
    async fn estimate(&mut self, frame: &VideoFrame) -> PoseResult<Vec<Pose>>;
}

/// Error types for the session loop
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Session already running")]
    AlreadyRunning,

    #[error("Frame acquisition failed: {0}")]
    Frame(#[from] FrameError),

    #[error("Pose estimation failed: {0}")]
    Pose(#[from] PoseError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Handle for stopping a running session from outside the loop
#[derive(Clone)]
pub struct SessionHandle {
    running: Arc<RwLock<bool>>,
}

impl SessionHandle {
    /// Ask the session loop to stop after the current frame
    pub async fn stop(&self) {
        *self.running.write().await = false;
    }

    pub async fn is_running(&self) -> bool {
        *self.running.read().await
    }
}

/// One pose-to-lights session
///
/// Owns the evaluator and the light controller; processes exactly one
/// frame end-to-end (estimate → evaluate → publish) per tick, never
/// overlapping frames.
pub struct PoseLightSession {
    config: ControllerConfig,
    evaluator: TriggerEvaluator,
    controller: LightController,
    running: Arc<RwLock<bool>>,
}

impl PoseLightSession {
    /// Create a session publishing through the given publisher
    pub fn new(config: ControllerConfig, publisher: Box<dyn StatePublisher>) -> Self {
        let evaluator = TriggerEvaluator::new(&config);
        let controller = LightController::new(config.mqtt_namespace.clone(), publisher);

        Self {
            config,
            evaluator,
            controller,
            running: Arc::new(RwLock::new(false)),
        }
    }

    /// Handle for stopping the loop from another task
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            running: self.running.clone(),
        }
    }

    /// Last state set for a light, if any
    pub fn light_state(&self, light_id: &str) -> Option<crate::models::light::LightState> {
        self.controller.light_state(light_id)
    }

    /// Process a single frame end-to-end
    ///
    /// The awaited estimation call is the only suspension point; publishes
    /// are conditional on a state transition.
    pub async fn process_frame(
        &mut self,
        frame: &VideoFrame,
        poses: &mut dyn PoseSource,
    ) -> PipelineResult<TriggerDecision> {
        let detected = poses.estimate(frame).await?;
        let decision = self.evaluator.evaluate(&detected)?;

        let left_id = self.config.left_light_id.clone();
        let right_id = self.config.right_light_id.clone();

        // Serialization failures aside, publish errors never surface here
        if let Err(e) = self.controller.set_light_state(&left_id, decision.left).await {
            eprintln!("Failed to encode command for {}: {}", left_id, e);
        }
        if let Err(e) = self.controller.set_light_state(&right_id, decision.right).await {
            eprintln!("Failed to encode command for {}: {}", right_id, e);
        }

        Ok(decision)
    }

    /// Run the session loop at the configured frame rate
    ///
    /// Each tick processes one frame fully before the next is requested,
    /// so at most one frame is ever in flight. Returns when the frame
    /// source is exhausted, the handle stops the session, or a fatal
    /// error (estimator contract violation) occurs.
    pub async fn run(
        &mut self,
        frames: &mut dyn FrameSource,
        poses: &mut dyn PoseSource,
    ) -> PipelineResult<()> {
        {
            let mut running = self.running.write().await;
            if *running {
                return Err(PipelineError::AlreadyRunning);
            }
            *running = true;
        }

        println!(
            "Started pose-to-lights session ({}x{} @ {} fps)",
            self.config.frame_width, self.config.frame_height, self.config.target_fps
        );

        let result = self.run_loop(frames, poses).await;

        *self.running.write().await = false;
        println!("Stopped pose-to-lights session");

        result
    }

    async fn run_loop(
        &mut self,
        frames: &mut dyn FrameSource,
        poses: &mut dyn PoseSource,
    ) -> PipelineResult<()> {
        let tick = Duration::from_millis(1000 / self.config.target_fps as u64);
        let mut interval = tokio::time::interval(tick);
        // A slow frame delays the next tick instead of bursting to catch up
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            if !*self.running.read().await {
                return Ok(());
            }

            let frame = match frames.next_frame().await {
                Ok(frame) => frame,
                Err(FrameError::Exhausted) => return Ok(()),
                Err(e) => return Err(e.into()),
            };

            self.process_frame(&frame, poses).await?;
        }
    }
}
