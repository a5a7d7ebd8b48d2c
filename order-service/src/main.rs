mod args;

use args::Args;
use broker_relay::{LogPublisher, RelayHandler};
use clap::Parser;
use event_core::{Event, EventDispatcher, EventRegistry};
use log::info;
use order_service::config::ServiceConfig;
use order_service::events;
use order_service::repository::MemoryOrderRepository;
use order_service::usecase::{CreateOrderInput, CreateOrderUseCase, ListOrdersUseCase};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = ServiceConfig {
        exchange: args.exchange.clone(),
        routing_key: args.routing_key.clone(),
        ..Default::default()
    };

    info!(
        "=== Order Service Starting [exchange='{}' routing_key='{}'] ===",
        config.exchange, config.routing_key
    );

    // 1. Events. Created once, reused across dispatches.
    let mut registry = EventRegistry::new();
    registry.register(Arc::new(Event::new(events::ORDER_CREATED)));
    registry.register(Arc::new(Event::new(events::ORDERS_LISTED)));

    // 2. Broker seam. A live channel would be injected here; the demo logs.
    let publisher = Arc::new(LogPublisher::new());

    // 3. Dispatcher with one relay handler per event.
    let mut dispatcher = EventDispatcher::new(registry);
    for name in [events::ORDER_CREATED, events::ORDERS_LISTED] {
        dispatcher.add_handler(
            name,
            Arc::new(
                RelayHandler::new(publisher.clone())
                    .with_routing(config.exchange.clone(), config.routing_key.clone()),
            ),
        );
    }
    let dispatcher = Arc::new(dispatcher);

    // 4. Domain wiring.
    let repository = Arc::new(MemoryOrderRepository::new());
    let create_order = CreateOrderUseCase::new(repository.clone(), dispatcher.clone());
    let list_orders = ListOrdersUseCase::new(repository);

    // 5. Seed demo orders; each create announces order.created.
    for i in 1..=args.seed_orders {
        let output = create_order
            .execute(CreateOrderInput {
                id: i,
                price: 100.0 * i as f64,
                tax: 5.0 * i as f64,
            })
            .await?;
        info!("Created order {} (final price {:.2})", output.id, output.final_price);
    }

    // 6. List and announce the listing.
    let listing = list_orders.execute()?;
    info!("Listed {} order(s)", listing.len());

    let listed = dispatcher
        .registry()
        .get(events::ORDERS_LISTED)
        .expect("orders.listed registered above");
    listed.set_payload(serde_json::to_value(&listing)?);
    dispatcher.dispatch(events::ORDERS_LISTED).await?;

    info!("Done.");
    Ok(())
}
