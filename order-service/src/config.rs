use serde::{Deserialize, Serialize};

/// Service wiring configuration.
///
/// Defaults mirror the broker setup every event is published to today: one
/// shared direct exchange, no per-event routing.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    pub exchange: String,
    pub routing_key: String,
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            exchange: "amq.direct".to_string(),
            routing_key: String::new(),
            log_level: "info".to_string(),
        }
    }
}
