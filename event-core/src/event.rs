use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A named event carrying an opaque JSON payload.
///
/// Events are created once at wiring time and reused across dispatches: the
/// name never changes, the payload is replaced before each dispatch. The
/// dispatcher treats the payload as opaque bytes-to-be; no shape validation
/// happens here.
///
/// Note: the lock only prevents data races. Replacing the payload while a
/// dispatch of the same event is still in flight hands the new payload to
/// whichever handlers have not read it yet. Producers are expected to
/// dispatch, wait, then overwrite.
#[derive(Debug)]
pub struct Event {
    name: String,
    payload: RwLock<Value>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: RwLock::new(Value::Null),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a snapshot (clone) of the current payload.
    pub fn payload(&self) -> Value {
        self.payload.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Replaces the payload for the next dispatch.
    pub fn set_payload(&self, payload: Value) {
        *self.payload.write().unwrap_or_else(|e| e.into_inner()) = payload;
    }
}

/// Name-keyed map of the events known to the process.
///
/// Populated during wiring, read-only afterward. Registering an existing
/// name replaces the previous event.
#[derive(Debug, Default)]
pub struct EventRegistry {
    events: HashMap<String, Arc<Event>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the event under its own name.
    pub fn register(&mut self, event: Arc<Event>) {
        self.events.insert(event.name().to_string(), event);
    }

    /// Looks up an event by name. Unknown names yield `None`; callers decide
    /// whether that is an error.
    pub fn get(&self, name: &str) -> Option<Arc<Event>> {
        self.events.get(name).cloned()
    }
}
