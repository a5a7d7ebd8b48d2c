//! # Broker Relay Library
//!
//! Bridges the in-process event layer to a message broker: the
//! [`BrokerPublisher`] port models the (pre-established, injected) broker
//! channel, and [`RelayHandler`] is the event handler that serializes event
//! payloads and forwards them onto an exchange.

pub mod log_publisher;
pub mod mock;
pub mod publisher;
pub mod relay;

pub use log_publisher::LogPublisher;
pub use publisher::{BrokerPublisher, PublishError, Publishing};
pub use relay::{RelayError, RelayHandler};
