use super::OrderOutput;
use crate::repository::{OrderRepository, RepositoryError};
use std::sync::Arc;

/// Straight projection of the stored orders. Raising `orders.listed` is left
/// to the caller, which owns the dispatcher.
pub struct ListOrdersUseCase {
    repository: Arc<dyn OrderRepository>,
}

impl ListOrdersUseCase {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<Vec<OrderOutput>, RepositoryError> {
        let orders = self.repository.list()?;
        Ok(orders.iter().map(OrderOutput::from).collect())
    }
}
