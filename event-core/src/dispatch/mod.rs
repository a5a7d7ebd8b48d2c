use crate::event::{Event, EventRegistry};
use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Event not found: {0}")]
    EventNotFound(String),
}

/// Completion signal handed to each handler invocation.
///
/// Wraps a channel sender; the dispatcher waits for every sender to go away.
/// Dropping the guard signals completion, so a handler that errors out (or
/// panics) can never stall the dispatch. `signal` exists to make the intent
/// explicit at the end of a handler body.
#[derive(Debug)]
pub struct Completion {
    _guard: mpsc::Sender<()>,
}

impl Completion {
    fn new(guard: mpsc::Sender<()>) -> Self {
        Self { _guard: guard }
    }

    /// Consumes the guard, registering completion.
    pub fn signal(self) {}
}

/// A unit of work reacting to a dispatched event.
///
/// Handlers must be safe for concurrent invocation: every dispatch runs them
/// on their own tokio task. Whatever happens inside, the handler must let
/// `done` go (explicitly or by dropping it) before returning.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: Arc<Event>, done: Completion);
}

/// Fans dispatched events out to their bound handlers.
///
/// Holds the registry plus an ordered handler list per event name. The list
/// order carries no execution guarantee: handlers run concurrently and may
/// finish in any order.
pub struct EventDispatcher {
    registry: EventRegistry,
    handlers: HashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    pub fn new(registry: EventRegistry) -> Self {
        Self {
            registry,
            handlers: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    /// Appends a handler to the list for `event_name`. A name may carry
    /// zero, one or many handlers.
    pub fn add_handler(&mut self, event_name: impl Into<String>, handler: Arc<dyn EventHandler>) {
        self.handlers.entry(event_name.into()).or_default().push(handler);
    }

    /// Fires the named event: spawns one task per bound handler and waits
    /// until every one has signalled completion.
    ///
    /// An unknown name fails with [`DispatchError::EventNotFound`] before any
    /// handler runs. Zero bound handlers is a no-op. Handler-internal
    /// failures never reach the caller; handlers report them locally.
    ///
    /// There is no deadline: a handler that never finishes hangs the dispatch.
    /// Callers wanting a timeout must layer one externally.
    pub async fn dispatch(&self, event_name: &str) -> Result<(), DispatchError> {
        let event = self
            .registry
            .get(event_name)
            .ok_or_else(|| DispatchError::EventNotFound(event_name.to_string()))?;

        let handlers = match self.handlers.get(event_name) {
            Some(handlers) if !handlers.is_empty() => handlers,
            _ => {
                debug!("No handlers bound to '{}', nothing to do", event_name);
                return Ok(());
            }
        };

        debug!("Dispatching '{}' to {} handler(s)", event_name, handlers.len());

        // Counting barrier: each task owns a sender clone, recv() yields None
        // once the last one is gone.
        let (done_tx, mut done_rx) = mpsc::channel::<()>(1);

        for handler in handlers {
            let handler = handler.clone();
            let event = event.clone();
            let done = Completion::new(done_tx.clone());
            tokio::spawn(async move {
                handler.handle(event, done).await;
            });
        }

        drop(done_tx);
        while done_rx.recv().await.is_some() {}

        debug!("Dispatch of '{}' complete", event_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
