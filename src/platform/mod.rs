// Adapters for external collaborators (MQTT broker)

pub mod mqtt;
