// Data models for light state and the zigbee2mqtt command wire format

use serde::{Deserialize, Serialize};

/// On/off state of a controlled light
///
/// Serialized with the zigbee2mqtt wire names `ON` / `OFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightState {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl LightState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LightState::On => "ON",
            LightState::Off => "OFF",
        }
    }

    /// Map a trigger decision (should the light be on?) to a state
    pub fn from_trigger(on: bool) -> Self {
        if on {
            LightState::On
        } else {
            LightState::Off
        }
    }
}

impl std::fmt::Display for LightState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload published to `<namespace>/<light-id>/set`
///
/// `transition` is in seconds; this controller always switches immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightCommand {
    pub state: LightState,
    pub transition: u32,
}

impl LightCommand {
    pub fn new(state: LightState) -> Self {
        Self {
            state,
            transition: 0,
        }
    }
}

/// Build the command topic for a light: `<namespace>/<light-id>/set`
pub fn set_topic(namespace: &str, light_id: &str) -> String {
    format!("{}/{}/set", namespace, light_id)
}

/// Error types for state publishing
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Publish failed: {0}")]
    PublishFailed(String),

    #[error("Payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type PublishResult<T> = Result<T, PublishError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_state_wire_names() {
        assert_eq!(serde_json::to_string(&LightState::On).unwrap(), "\"ON\"");
        assert_eq!(serde_json::to_string(&LightState::Off).unwrap(), "\"OFF\"");
    }

    #[test]
    fn test_light_state_from_trigger() {
        assert_eq!(LightState::from_trigger(true), LightState::On);
        assert_eq!(LightState::from_trigger(false), LightState::Off);
    }

    #[test]
    fn test_command_payload_format() {
        let command = LightCommand::new(LightState::On);
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, "{\"state\":\"ON\",\"transition\":0}");

        let command = LightCommand::new(LightState::Off);
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, "{\"state\":\"OFF\",\"transition\":0}");
    }

    #[test]
    fn test_set_topic() {
        assert_eq!(
            set_topic("zigbee2mqtt", "desk_lamp_left"),
            "zigbee2mqtt/desk_lamp_left/set"
        );
    }
}
