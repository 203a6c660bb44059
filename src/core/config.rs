use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Controller configuration
///
/// Passed explicitly into the trigger evaluator and session; there is no
/// process-wide mutable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControllerConfig {
    /// Minimum overall pose confidence for a pose to be considered (0.0-1.0)
    pub min_pose_confidence: f32,
    /// Minimum per-keypoint confidence for a wrist to trigger (0.0-1.0)
    pub min_part_confidence: f32,
    /// Video frame width in pixels
    pub frame_width: u32,
    /// Video frame height in pixels
    pub frame_height: u32,
    /// Frames per second the session loop processes
    pub target_fps: u32,
    /// Topic namespace of the zigbee2mqtt bridge
    pub mqtt_namespace: String,
    /// Light controlled by the top-left quadrant
    pub left_light_id: String,
    /// Light controlled by the top-right quadrant
    pub right_light_id: String,
    /// MQTT broker host
    pub broker_host: String,
    /// MQTT broker port
    pub broker_port: u16,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            min_pose_confidence: 0.6,
            min_part_confidence: 0.1,
            frame_width: 600,
            frame_height: 500,
            target_fps: 15,
            mqtt_namespace: "zigbee2mqtt".to_string(),
            left_light_id: "desk_lamp_left".to_string(),
            right_light_id: "desk_lamp_right".to_string(),
            broker_host: "localhost".to_string(),
            broker_port: 1883,
        }
    }
}

impl ControllerConfig {
    /// Load configuration from file, creating with defaults if it doesn't exist
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: ControllerConfig = serde_json::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            // Create default config and save it
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.validate()?;

        let config_path = Self::get_config_path()?;

        // Create parent directories if they don't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if !(0.0..=1.0).contains(&self.min_pose_confidence) {
            return Err(format!(
                "Invalid pose confidence threshold: {}. Must be between 0.0 and 1.0",
                self.min_pose_confidence
            )
            .into());
        }

        if !(0.0..=1.0).contains(&self.min_part_confidence) {
            return Err(format!(
                "Invalid part confidence threshold: {}. Must be between 0.0 and 1.0",
                self.min_part_confidence
            )
            .into());
        }

        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(format!(
                "Invalid frame dimensions: {}x{}. Must be non-zero",
                self.frame_width, self.frame_height
            )
            .into());
        }

        if self.target_fps == 0 || self.target_fps > 60 {
            return Err(format!(
                "Invalid FPS: {}. Must be between 1 and 60",
                self.target_fps
            )
            .into());
        }

        if self.mqtt_namespace.is_empty() {
            return Err("MQTT namespace cannot be empty".into());
        }

        if self.left_light_id.is_empty() || self.right_light_id.is_empty() {
            return Err("Light identifiers cannot be empty".into());
        }

        if self.broker_host.is_empty() {
            return Err("Broker host cannot be empty".into());
        }

        Ok(())
    }

    /// Reset to default configuration
    pub fn reset() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Self::default();
        config.save()?;
        Ok(config)
    }

    /// Get the configuration file path
    fn get_config_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| "Could not determine home directory")?;

        let mut path = PathBuf::from(home);
        path.push(".pose_lights");
        path.push("config");
        path.push("settings.json");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ControllerConfig::default();
        assert_eq!(config.min_pose_confidence, 0.6);
        assert_eq!(config.min_part_confidence, 0.1);
        assert_eq!(config.frame_width, 600);
        assert_eq!(config.frame_height, 500);
        assert_eq!(config.target_fps, 15);
        assert_eq!(config.mqtt_namespace, "zigbee2mqtt");
        assert_eq!(config.broker_port, 1883);
    }

    #[test]
    fn test_config_validation() {
        let mut config = ControllerConfig::default();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Invalid pose confidence
        config.min_pose_confidence = 1.5;
        assert!(config.validate().is_err());
        config.min_pose_confidence = 0.6;

        // Invalid part confidence
        config.min_part_confidence = -0.1;
        assert!(config.validate().is_err());
        config.min_part_confidence = 0.1;

        // Invalid frame dimensions
        config.frame_width = 0;
        assert!(config.validate().is_err());
        config.frame_width = 600;

        // Invalid FPS
        config.target_fps = 0;
        assert!(config.validate().is_err());
        config.target_fps = 100;
        assert!(config.validate().is_err());
        config.target_fps = 15;

        // Empty light identifier
        config.left_light_id = String::new();
        assert!(config.validate().is_err());
        config.left_light_id = "desk_lamp_left".to_string();

        // Empty namespace
        config.mqtt_namespace = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = ControllerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ControllerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
