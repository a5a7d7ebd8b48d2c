use super::OrderOutput;
use crate::events;
use crate::model::{Order, OrderError};
use crate::repository::{OrderRepository, RepositoryError};
use event_core::{DispatchError, EventDispatcher};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreateOrderError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error("Failed to build event payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct CreateOrderInput {
    pub id: u64,
    pub price: f64,
    pub tax: f64,
}

/// Validates, stores and announces a new order.
///
/// The `order.created` event must be registered on the dispatcher before this
/// use case runs; a missing registration is a wiring bug and surfaces as
/// [`DispatchError::EventNotFound`]. Handler failures stay invisible here,
/// per the dispatch contract.
pub struct CreateOrderUseCase {
    repository: Arc<dyn OrderRepository>,
    dispatcher: Arc<EventDispatcher>,
}

impl CreateOrderUseCase {
    pub fn new(repository: Arc<dyn OrderRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    pub async fn execute(&self, input: CreateOrderInput) -> Result<OrderOutput, CreateOrderError> {
        let order = Order::new(input.id, input.price, input.tax)?;
        self.repository.save(&order)?;

        let output = OrderOutput::from(&order);

        let event = self
            .dispatcher
            .registry()
            .get(events::ORDER_CREATED)
            .ok_or_else(|| DispatchError::EventNotFound(events::ORDER_CREATED.to_string()))?;
        event.set_payload(serde_json::to_value(&output)?);
        self.dispatcher.dispatch(events::ORDER_CREATED).await?;

        Ok(output)
    }
}
