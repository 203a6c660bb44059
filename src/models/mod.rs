// Data models for video frames, pose estimation, and light control

pub mod frame;
pub mod light;
pub mod pose;
