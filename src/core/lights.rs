// Light state store and publisher gateway - the sole point of network side effects

use crate::models::light::{set_topic, LightCommand, LightState, PublishResult};
use async_trait::async_trait;
use std::collections::HashMap;

/// Outbound port for state publishes
///
/// Adapters decide where messages go: the bundled MQTT client for a real
/// zigbee2mqtt bridge, or an in-memory recorder in tests.
#[async_trait]
pub trait StatePublisher: Send + Sync {
    /// Publish a payload to a topic, fire-and-forget
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> PublishResult<()>;
}

/// De-duplicating light controller
///
/// Owns the per-light state map for one session and publishes through the
/// configured `StatePublisher` only when a light's state actually changes.
pub struct LightController {
    namespace: String,
    publisher: Box<dyn StatePublisher>,
    states: HashMap<String, LightState>,
}

impl LightController {
    /// Create a controller publishing under the given topic namespace
    pub fn new(namespace: impl Into<String>, publisher: Box<dyn StatePublisher>) -> Self {
        Self {
            namespace: namespace.into(),
            publisher,
            states: HashMap::new(),
        }
    }

    /// Set a light's state, publishing only on change
    ///
    /// Strictly edge-triggered: repeated identical calls for the same
    /// light produce exactly one publish, at the transition. The very
    /// first state seen for a light always publishes.
    ///
    /// Publish failures are logged and swallowed; the store keeps the
    /// attempted state, so a reconnected broker catches up on the next
    /// transition rather than the next identical call.
    pub async fn set_light_state(&mut self, light_id: &str, new_state: LightState) -> PublishResult<()> {
        if self.states.get(light_id) == Some(&new_state) {
            return Ok(());
        }

        self.states.insert(light_id.to_string(), new_state);

        let topic = set_topic(&self.namespace, light_id);
        let payload = serde_json::to_vec(&LightCommand::new(new_state))?;

        if let Err(e) = self.publisher.publish(&topic, payload).await {
            eprintln!("Failed to publish state {} for light {}: {}", new_state, light_id, e);
        }

        Ok(())
    }

    /// Last state set for a light, if any
    pub fn light_state(&self, light_id: &str) -> Option<LightState> {
        self.states.get(light_id).copied()
    }
}
