use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Publish rejected by broker: {0}")]
    Rejected(String),
    #[error("Broker channel closed")]
    ChannelClosed,
}

/// Message envelope handed to the broker.
#[derive(Debug, Clone)]
pub struct Publishing {
    pub content_type: String,
    pub body: Vec<u8>,
    pub message_id: Uuid,
    pub timestamp: i64,
}

impl Publishing {
    pub fn new(content_type: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            body,
            message_id: Uuid::new_v4(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// JSON envelope, the only content type the relay currently produces.
    pub fn json(body: Vec<u8>) -> Self {
        Self::new("application/json", body)
    }
}

/// Interface to an already-open broker channel.
///
/// Connection and channel lifecycle live with the process wiring; handlers
/// only ever see this trait. Implementations must be safe for concurrent use
/// by multiple handler tasks, or serialize publishes internally.
#[async_trait]
pub trait BrokerPublisher: Send + Sync {
    /// Publish a message to `exchange` under `routing_key`.
    ///
    /// `mandatory` and `immediate` mirror the broker's delivery flags; the
    /// relay always passes false for both.
    async fn publish(
        &self,
        exchange: &str,
        routing_key: &str,
        mandatory: bool,
        immediate: bool,
        message: Publishing,
    ) -> Result<(), PublishError>;
}
