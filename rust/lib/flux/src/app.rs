use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use tracing::warn;

use crate::router::{Payload, Router};
use crate::store::StateStore;
use crate::value::{StateValue, SubscriptionId};

/// Flux — the UI state engine.
///
/// Three primitives, all path-based:
/// - `get(path)` — read view state
/// - `emit(path, payload)` — deliver a UI event to its handler(s)
/// - `subscribe(pattern)` — observe view state changes
///
/// ```ignore
/// let flux = Flux::new();
/// flux.handle(ScrollReq::PATH, |req: ScrollReq, store| async move {
///     store.update(LayoutState::PATH, |l: &mut LayoutState| l.on_scroll(req.y));
/// });
/// flux.subscribe("ui/#", |path, value| repaint(path, value));
/// flux.emit(ScrollReq::PATH, ScrollReq { y: 240.0 }).await;
/// ```
pub struct Flux {
    store: Arc<StateStore>,
    router: Router,
}

impl Flux {
    pub fn new() -> Self {
        Self {
            store: Arc::new(StateStore::new()),
            router: Router::new(),
        }
    }

    // ====================================================================
    // State — read
    // ====================================================================

    pub fn get(&self, path: &str) -> Option<StateValue> {
        self.store.get(path)
    }

    /// Typed copy of the state at `path`.
    pub fn get_as<T: Any + Clone>(&self, path: &str) -> Option<T> {
        self.store.get_as(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.store.contains(path)
    }

    // ====================================================================
    // Requests — emit
    // ====================================================================

    /// Emit a request and wait until every matching handler has finished.
    /// Unmatched paths are a silent no-op.
    pub async fn emit<T: Any + Send + Sync>(&self, path: &str, payload: T) {
        self.router
            .dispatch(path, Arc::new(payload), Arc::clone(&self.store))
            .await;
    }

    pub async fn emit_arc(&self, path: &str, payload: Payload) {
        self.router
            .dispatch(path, payload, Arc::clone(&self.store))
            .await;
    }

    // ====================================================================
    // Requests — register handlers
    // ====================================================================

    /// Register a handler receiving the raw, type-erased payload.
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.router.on(pattern, handler);
    }

    /// Register a handler for requests of type `R`.
    ///
    /// The payload is downcast and cloned before the handler runs. A payload
    /// of any other type is logged and dropped instead of reaching the
    /// handler.
    pub fn handle<R, F, Fut>(&self, path: &str, handler: F)
    where
        R: Any + Clone + Send + Sync,
        F: Fn(R, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler = Arc::new(handler);
        self.router.on(path, move |path, payload, store| {
            let handler = Arc::clone(&handler);
            let req = payload.downcast_ref::<R>().cloned();
            async move {
                match req {
                    Some(req) => handler(req, store).await,
                    None => warn!(
                        path = %path,
                        expected = std::any::type_name::<R>(),
                        "request payload has unexpected type, ignored"
                    ),
                }
            }
        });
    }

    // ====================================================================
    // Subscriptions
    // ====================================================================

    /// Called synchronously on the task that changed the state.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        self.store.subscribe(pattern, handler)
    }

    pub fn unsubscribe(&self, pattern: &str, id: SubscriptionId) {
        self.store.unsubscribe(pattern, id);
    }

    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }
}

impl Default for Flux {
    fn default() -> Self {
        Self::new()
    }
}
