use crate::publisher::{BrokerPublisher, PublishError, Publishing};
use async_trait::async_trait;
use log::info;

/// Publisher that logs instead of touching a live channel.
///
/// Used by the demo wiring where a real broker connection would be injected.
#[derive(Debug, Default)]
pub struct LogPublisher;

impl LogPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BrokerPublisher for LogPublisher {
    async fn publish(
        &self,
        exchange: &str,
        routing_key: &str,
        _mandatory: bool,
        _immediate: bool,
        message: Publishing,
    ) -> Result<(), PublishError> {
        info!(
            "PUBLISH exchange='{}' routing_key='{}' content_type='{}' body={}",
            exchange,
            routing_key,
            message.content_type,
            String::from_utf8_lossy(&message.body),
        );
        Ok(())
    }
}
