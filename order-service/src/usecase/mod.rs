pub mod create_order;
pub mod list_orders;

pub use create_order::{CreateOrderError, CreateOrderInput, CreateOrderUseCase};
pub use list_orders::ListOrdersUseCase;

use crate::model::Order;
use serde::{Deserialize, Serialize};

/// Projection returned by the use cases and published as event payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderOutput {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Tax")]
    pub tax: f64,
    #[serde(rename = "FinalPrice")]
    pub final_price: f64,
}

impl From<&Order> for OrderOutput {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            price: order.price,
            tax: order.tax,
            final_price: order.final_price,
        }
    }
}
