// MQTT publisher adapter - connects the light controller to a real broker

use crate::core::config::ControllerConfig;
use crate::core::lights::StatePublisher;
use crate::models::light::{PublishError, PublishResult};
use async_trait::async_trait;
use rumqttc::{AsyncClient, MqttOptions, QoS};
use std::time::Duration;

/// `StatePublisher` backed by rumqttc
///
/// Publishes at QoS 0 with no retry and no acknowledgment wait; delivery
/// and ordering are the broker's business. The connection event loop runs
/// on a background task for the lifetime of the publisher.
pub struct MqttPublisher {
    client: AsyncClient,
}

impl MqttPublisher {
    /// Connect to the broker named in the configuration
    ///
    /// The returned publisher is usable immediately; rumqttc buffers
    /// publishes issued before the connection is established.
    pub fn connect(client_id: &str, config: &ControllerConfig) -> Self {
        let mut options = MqttOptions::new(client_id, &config.broker_host, config.broker_port);
        options.set_keep_alive(Duration::from_secs(5));

        let (client, mut event_loop) = AsyncClient::new(options, 16);

        // Drive the connection; errors are logged, never propagated, since
        // publishes are fire-and-forget anyway
        tokio::spawn(async move {
            loop {
                if let Err(e) = event_loop.poll().await {
                    eprintln!("MQTT connection error: {}", e);
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
            }
        });

        Self { client }
    }
}

#[async_trait]
impl StatePublisher for MqttPublisher {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> PublishResult<()> {
        self.client
            .publish(topic, QoS::AtMostOnce, false, payload)
            .await
            .map_err(|e| PublishError::PublishFailed(e.to_string()))
    }
}
