use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum OrderError {
    #[error("Price must be greater than zero")]
    InvalidPrice,
    #[error("Tax must not be negative")]
    InvalidTax,
}

/// An order as stored and as serialized onto the wire.
///
/// Field names stay capitalized for compatibility with existing downstream
/// consumers of the published JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Tax")]
    pub tax: f64,
    #[serde(rename = "FinalPrice")]
    pub final_price: f64,
}

impl Order {
    /// Validates the inputs and derives the final price.
    pub fn new(id: u64, price: f64, tax: f64) -> Result<Self, OrderError> {
        if price <= 0.0 {
            return Err(OrderError::InvalidPrice);
        }
        if tax < 0.0 {
            return Err(OrderError::InvalidTax);
        }
        Ok(Self {
            id,
            price,
            tax,
            final_price: price + tax,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_final_price_is_derived() {
        let order = Order::new(42, 100.0, 5.0).unwrap();
        assert_eq!(order.final_price, 105.0);
    }

    #[test]
    fn test_validation() {
        assert_eq!(Order::new(1, 0.0, 5.0), Err(OrderError::InvalidPrice));
        assert_eq!(Order::new(1, -10.0, 5.0), Err(OrderError::InvalidPrice));
        assert_eq!(Order::new(1, 10.0, -1.0), Err(OrderError::InvalidTax));
    }

    #[test]
    fn test_wire_field_names() {
        let order = Order::new(42, 100.0, 5.0).unwrap();
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({"ID": 42, "Price": 100.0, "Tax": 5.0, "FinalPrice": 105.0})
        );
    }
}
