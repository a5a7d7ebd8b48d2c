//! Well-known event names raised by this service.

/// Raised after an order has been stored.
pub const ORDER_CREATED: &str = "order.created";

/// Raised after a listing has been produced for a consumer.
pub const ORDERS_LISTED: &str = "orders.listed";
