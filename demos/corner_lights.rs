// Drive the pose-to-lights session with a synthetic wrist gesture
//
// Without arguments, publishes to stdout; pass a broker host to publish
// to a real zigbee2mqtt bridge, e.g. `corner_lights localhost`.

use async_trait::async_trait;
use pose_lights::{
    ControllerConfig, FrameError, FrameResult, FrameSource, Keypoint, KeypointName, MqttPublisher,
    PixelFormat, Pose, PoseLightSession, PoseResult, PoseSource, PublishResult, StatePublisher,
    VideoFrame,
};

/// Publisher that prints each message instead of hitting a broker
struct ConsolePublisher;

#[async_trait]
impl StatePublisher for ConsolePublisher {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> PublishResult<()> {
        println!("  publish {} {}", topic, String::from_utf8_lossy(&payload));
        Ok(())
    }
}

/// Blank frames standing in for a webcam
struct SyntheticCamera {
    remaining: usize,
    width: u32,
    height: u32,
}

#[async_trait]
impl FrameSource for SyntheticCamera {
    async fn next_frame(&mut self) -> FrameResult<VideoFrame> {
        if self.remaining == 0 {
            return Err(FrameError::Exhausted);
        }
        self.remaining -= 1;
        let data = vec![0u8; (self.width * self.height * 4) as usize];
        Ok(VideoFrame::new(self.width, self.height, data, PixelFormat::RGBA8))
    }
}

/// Scripted estimator: raises the left wrist into the top-left corner,
/// holds it there, then drops it
struct GestureScript {
    frame_index: usize,
    width: f32,
    height: f32,
}

#[async_trait]
impl PoseSource for GestureScript {
    async fn estimate(&mut self, _frame: &VideoFrame) -> PoseResult<Vec<Pose>> {
        let i = self.frame_index;
        self.frame_index += 1;

        // Frames 0-4: wrist in the corner. Frames 5+: wrist lowered.
        let (x, y) = if i < 5 {
            (self.width * 0.15, self.height * 0.1)
        } else {
            (self.width * 0.15, self.height * 0.9)
        };

        let keypoints = vec![
            Keypoint::new(KeypointName::LeftWrist, x, y, 0.9),
            Keypoint::new(KeypointName::RightWrist, self.width * 0.9, self.height * 0.9, 0.9),
        ];

        Ok(vec![Pose::new(0.85, keypoints)])
    }
}

#[tokio::main]
async fn main() {
    println!("=== Corner Lights Demo ===\n");

    let config = ControllerConfig::default();
    println!(
        "Frame {}x{}, pose threshold {}, part threshold {}",
        config.frame_width, config.frame_height,
        config.min_pose_confidence, config.min_part_confidence
    );

    let publisher: Box<dyn StatePublisher> = match std::env::args().nth(1) {
        Some(host) => {
            println!("Publishing to MQTT broker at {}:{}\n", host, config.broker_port);
            let mut mqtt_config = config.clone();
            mqtt_config.broker_host = host;
            Box::new(MqttPublisher::connect("corner-lights-demo", &mqtt_config))
        }
        None => {
            println!("No broker given, publishing to stdout\n");
            Box::new(ConsolePublisher)
        }
    };

    let mut session = PoseLightSession::new(config.clone(), publisher);
    let mut camera = SyntheticCamera {
        remaining: 10,
        width: config.frame_width,
        height: config.frame_height,
    };
    let mut script = GestureScript {
        frame_index: 0,
        width: config.frame_width as f32,
        height: config.frame_height as f32,
    };

    match session.run(&mut camera, &mut script).await {
        Ok(()) => {
            println!("\n✓ Session finished");
            println!(
                "  {} is {:?}, {} is {:?}",
                config.left_light_id,
                session.light_state(&config.left_light_id),
                config.right_light_id,
                session.light_state(&config.right_light_id)
            );
        }
        Err(e) => eprintln!("\n✗ Session failed: {}", e),
    }
}
