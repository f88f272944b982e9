
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// A subscriber callback. Fired from whichever execution context emits the
/// event, typically a capture or receive thread, so handlers must be cheap
/// or hand off to their own queue.
pub type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Token returned by [`EventStream::subscribe`], used to unsubscribe.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HandlerId(usize);

/// Multi-subscriber event dispatch for the steady-state data path.
///
/// Subscribers fire in registration order. Delivery is best-effort isolated:
/// a panicking subscriber is logged and skipped without blocking the rest.
/// Registration and emission may happen concurrently from different threads;
/// emission works on a snapshot, so a handler registered mid-emit sees only
/// subsequent events.
pub struct EventStream<T> {
    handlers: RwLock<Vec<(HandlerId, Handler<T>)>>,
    next_id: AtomicUsize,
}

impl<T> Default for EventStream<T> {
    fn default() -> Self {
        EventStream::new()
    }
}

impl<T> EventStream<T> {
    pub fn new() -> Self {
        EventStream {
            handlers: RwLock::new(Vec::new()),
            next_id: AtomicUsize::new(0),
        }
    }

    /// Registers a subscriber and returns its unsubscribe token.
    pub fn subscribe(&self, handler: impl Fn(&T) + Send + Sync + 'static) -> HandlerId {
        self.subscribe_handler(Arc::new(handler))
    }

    /// Registers an already-boxed subscriber, the form trait objects hand in.
    pub fn subscribe_handler(&self, handler: Handler<T>) -> HandlerId {
        let id = HandlerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, handler));
        id
    }

    /// Removes a subscriber. Returns false if the token was already gone.
    pub fn unsubscribe(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        let before = handlers.len();
        handlers.retain(|(handler_id, _)| *handler_id != id);
        handlers.len() != before
    }

    /// Whether anyone is currently subscribed.
    ///
    /// The cost-avoidance hook: a source can skip expensive encoding work
    /// entirely while no consumer is listening for encoded samples.
    pub fn has_subscribers(&self) -> bool {
        !self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Delivers `event` to every subscriber in registration order.
    pub fn emit(&self, event: &T) {
        let snapshot: Vec<Handler<T>> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        for handler in snapshot {
            if panic::catch_unwind(AssertUnwindSafe(|| handler(event))).is_err() {
                log::warn!("event subscriber panicked, continuing delivery to remaining subscribers");
            }
        }
    }
}
