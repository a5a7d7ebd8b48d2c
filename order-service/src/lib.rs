//! # Order Service Library
//!
//! Order domain plus the wiring that raises `order.created` and
//! `orders.listed` events toward the broker relay.
//!
//! ## Modules
//! - `model`: The order entity.
//! - `repository`: Persistence seam and the in-memory implementation.
//! - `usecase`: CreateOrder and ListOrders use cases.
//! - `events`: Well-known event names.

pub mod config;
pub mod events;
pub mod model;
pub mod repository;
pub mod usecase;
