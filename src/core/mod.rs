pub mod config;
pub mod lights;
pub mod pipeline;
pub mod trigger;
