//! # Event Core Library
//!
//! In-process event notification layer shared by the service crates.
//!
//! ## Modules
//! - `event`: Named events with an opaque JSON payload, plus the registry.
//! - `dispatch`: The dispatcher, the handler trait and completion signalling.

pub mod dispatch;
pub mod event;

pub use dispatch::{Completion, DispatchError, EventDispatcher, EventHandler};
pub use event::{Event, EventRegistry};
