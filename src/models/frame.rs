// Data structures for video frames handed to the pose estimator

/// A single frame of webcam video
#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// Capture time, milliseconds since the Unix epoch
    pub timestamp: i64,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl VideoFrame {
    pub fn new(width: u32, height: u32, data: Vec<u8>, format: PixelFormat) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp_millis(),
            width,
            height,
            data,
            format,
        }
    }
}

/// Pixel format of captured frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGBA8,
    BGRA8,
}

/// Error types for frame acquisition
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("Camera not available: {0}")]
    CameraUnavailable(String),

    #[error("Frame capture failed: {0}")]
    CaptureFailed(String),

    #[error("Frame source exhausted")]
    Exhausted,
}

pub type FrameResult<T> = Result<T, FrameError>;
