//! Test doubles for the broker channel.

use crate::publisher::{BrokerPublisher, PublishError, Publishing};
use async_trait::async_trait;
use std::sync::Mutex;

/// A single captured publish call.
#[derive(Debug, Clone)]
pub struct PublishRecord {
    pub exchange: String,
    pub routing_key: String,
    pub mandatory: bool,
    pub immediate: bool,
    pub message: Publishing,
}

/// Records every publish for later inspection.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    calls: Mutex<Vec<PublishRecord>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<PublishRecord> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BrokerPublisher for RecordingPublisher {
    async fn publish(
        &self,
        exchange: &str,
        routing_key: &str,
        mandatory: bool,
        immediate: bool,
        message: Publishing,
    ) -> Result<(), PublishError> {
        self.calls.lock().unwrap().push(PublishRecord {
            exchange: exchange.to_string(),
            routing_key: routing_key.to_string(),
            mandatory,
            immediate,
            message,
        });
        Ok(())
    }
}

/// Rejects every publish. Exercises the handler-local error policy.
#[derive(Debug, Default)]
pub struct FailingPublisher;

#[async_trait]
impl BrokerPublisher for FailingPublisher {
    async fn publish(
        &self,
        _exchange: &str,
        _routing_key: &str,
        _mandatory: bool,
        _immediate: bool,
        _message: Publishing,
    ) -> Result<(), PublishError> {
        Err(PublishError::Rejected("broker unavailable".to_string()))
    }
}
