use crate::model::Order;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Order {0} already exists")]
    Duplicate(u64),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Persistence seam for orders. Implementations back the listing use case;
/// a real database adapter would live behind this trait.
pub trait OrderRepository: Send + Sync {
    fn save(&self, order: &Order) -> Result<(), RepositoryError>;
    fn list(&self) -> Result<Vec<Order>, RepositoryError>;
}

/// Mutexed in-memory store used by the demo wiring and the tests.
#[derive(Debug, Default)]
pub struct MemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for MemoryOrderRepository {
    fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut orders = self
            .orders
            .lock()
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        if orders.iter().any(|o| o.id == order.id) {
            return Err(RepositoryError::Duplicate(order.id));
        }
        orders.push(order.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = self
            .orders
            .lock()
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(orders.clone())
    }
}
