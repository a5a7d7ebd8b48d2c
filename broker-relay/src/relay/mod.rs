use crate::publisher::{BrokerPublisher, PublishError, Publishing};
use async_trait::async_trait;
use event_core::{Completion, Event, EventHandler};
use log::{debug, error};
use std::sync::Arc;
use thiserror::Error;

/// Exchange the original wiring publishes every event to.
pub const DEFAULT_EXCHANGE: &str = "amq.direct";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Failed to serialize event payload: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to publish: {0}")]
    Publish(#[from] PublishError),
}

/// Forwards event payloads to the broker as JSON messages.
///
/// One configurable handler covers every event type: exchange and routing
/// key are constructor state, defaulting to the shared `amq.direct` exchange
/// with an empty routing key. All failures are handler-local; they are
/// logged and never reach the dispatcher, and completion is signalled no
/// matter what.
pub struct RelayHandler {
    publisher: Arc<dyn BrokerPublisher>,
    exchange: String,
    routing_key: String,
}

impl RelayHandler {
    pub fn new(publisher: Arc<dyn BrokerPublisher>) -> Self {
        Self {
            publisher,
            exchange: DEFAULT_EXCHANGE.to_string(),
            routing_key: String::new(),
        }
    }

    pub fn with_routing(
        mut self,
        exchange: impl Into<String>,
        routing_key: impl Into<String>,
    ) -> Self {
        self.exchange = exchange.into();
        self.routing_key = routing_key.into();
        self
    }

    async fn forward(&self, event: &Event) -> Result<(), RelayError> {
        let body = serde_json::to_vec(&event.payload())?;
        debug!(
            "Relaying '{}' to exchange '{}' ({} bytes)",
            event.name(),
            self.exchange,
            body.len()
        );

        self.publisher
            .publish(
                &self.exchange,
                &self.routing_key,
                false, // mandatory
                false, // immediate
                Publishing::json(body),
            )
            .await?;

        Ok(())
    }
}

#[async_trait]
impl EventHandler for RelayHandler {
    async fn handle(&self, event: Arc<Event>, done: Completion) {
        if let Err(e) = self.forward(&event).await {
            error!("Relay of '{}' failed: {}", event.name(), e);
        }
        done.signal();
    }
}
