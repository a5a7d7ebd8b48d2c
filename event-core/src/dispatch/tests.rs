use super::*;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;

struct CountingHandler {
    invocations: AtomicUsize,
    payloads: Mutex<Vec<serde_json::Value>>,
}

impl CountingHandler {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            invocations: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        })
    }

    fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventHandler for CountingHandler {
    async fn handle(&self, event: Arc<Event>, done: Completion) {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(event.payload());
        done.signal();
    }
}

/// Sleeps before signalling, to catch a dispatcher that returns early.
struct SlowHandler {
    delay: Duration,
    finished: Arc<AtomicUsize>,
}

#[async_trait]
impl EventHandler for SlowHandler {
    async fn handle(&self, _event: Arc<Event>, done: Completion) {
        sleep(self.delay).await;
        self.finished.fetch_add(1, Ordering::SeqCst);
        done.signal();
    }
}

/// Drops the completion guard implicitly by panicking mid-handle.
struct PanickingHandler;

#[async_trait]
impl EventHandler for PanickingHandler {
    async fn handle(&self, _event: Arc<Event>, _done: Completion) {
        panic!("handler blew up");
    }
}

fn dispatcher_with(name: &str) -> EventDispatcher {
    let mut registry = EventRegistry::new();
    registry.register(Arc::new(Event::new(name)));
    EventDispatcher::new(registry)
}

#[tokio::test]
async fn test_unknown_event_fails_without_invocations() {
    let mut dispatcher = dispatcher_with("order.created");
    let handler = CountingHandler::new();
    dispatcher.add_handler("order.created", handler.clone());

    let result = dispatcher.dispatch("order.deleted").await;

    assert!(matches!(result, Err(DispatchError::EventNotFound(ref name)) if name == "order.deleted"));
    assert_eq!(handler.invocations(), 0, "no handler should have run");
}

#[tokio::test]
async fn test_zero_handlers_is_a_noop() {
    let dispatcher = dispatcher_with("order.created");
    dispatcher.dispatch("order.created").await.unwrap();
}

#[tokio::test]
async fn test_two_handlers_both_invoked_with_same_snapshot() {
    let mut dispatcher = dispatcher_with("orders.listed");
    let first = CountingHandler::new();
    let second = CountingHandler::new();
    dispatcher.add_handler("orders.listed", first.clone());
    dispatcher.add_handler("orders.listed", second.clone());

    let event = dispatcher.registry().get("orders.listed").unwrap();
    event.set_payload(json!([{"ID": 1}, {"ID": 2}]));

    dispatcher.dispatch("orders.listed").await.unwrap();

    assert_eq!(first.invocations(), 1);
    assert_eq!(second.invocations(), 1);
    assert_eq!(
        *first.payloads.lock().unwrap(),
        *second.payloads.lock().unwrap(),
        "both handlers should see the same payload snapshot"
    );
}

#[tokio::test]
async fn test_dispatch_waits_for_every_handler() {
    let mut dispatcher = dispatcher_with("order.created");
    let finished = Arc::new(AtomicUsize::new(0));

    for delay_ms in [10, 30, 50] {
        dispatcher.add_handler(
            "order.created",
            Arc::new(SlowHandler {
                delay: Duration::from_millis(delay_ms),
                finished: finished.clone(),
            }),
        );
    }

    dispatcher.dispatch("order.created").await.unwrap();

    assert_eq!(
        finished.load(Ordering::SeqCst),
        3,
        "dispatch returned before all handlers signalled"
    );
}

#[tokio::test]
async fn test_panicking_handler_does_not_hang_dispatch() {
    let mut dispatcher = dispatcher_with("order.created");
    let survivor = CountingHandler::new();
    dispatcher.add_handler("order.created", Arc::new(PanickingHandler));
    dispatcher.add_handler("order.created", survivor.clone());

    // The panic stays on its own task; the dropped guard still counts.
    dispatcher.dispatch("order.created").await.unwrap();

    assert_eq!(survivor.invocations(), 1);
}

#[tokio::test]
async fn test_repeated_dispatch_reuses_the_event() {
    let mut dispatcher = dispatcher_with("order.created");
    let handler = CountingHandler::new();
    dispatcher.add_handler("order.created", handler.clone());

    let event = dispatcher.registry().get("order.created").unwrap();

    event.set_payload(json!({"ID": 1}));
    dispatcher.dispatch("order.created").await.unwrap();

    event.set_payload(json!({"ID": 2}));
    dispatcher.dispatch("order.created").await.unwrap();

    assert_eq!(handler.invocations(), 2);
    let payloads = handler.payloads.lock().unwrap();
    assert_eq!(*payloads, vec![json!({"ID": 1}), json!({"ID": 2})]);
}
