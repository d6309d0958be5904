use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use crate::store::StateStore;
use crate::topic::TopicTable;

/// A boxed, `Send`-able future returned by request handlers.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Type-erased request payload.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// Handler as stored in the router. Takes owned arguments so the returned
/// future can be `'static`.
type ErasedHandler = Arc<dyn Fn(String, Payload, Arc<StateStore>) -> BoxFuture + Send + Sync>;

/// Request router: path patterns → async handlers.
///
/// A UI event ("code input lost focus", "card dropped on zone 3") is
/// emitted as a request at a path; every handler whose pattern matches
/// runs in registration order, one after the other.
pub struct Router {
    table: TopicTable<ErasedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            table: TopicTable::new(),
        }
    }

    /// Register an async handler for a path pattern (`+` / `#` allowed).
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: ErasedHandler = Arc::new(
            move |path: String, payload: Payload, store: Arc<StateStore>| -> BoxFuture {
                Box::pin(handler(path, payload, store))
            },
        );
        self.table.insert(pattern, handler);
    }

    /// Run every handler matching `path`. Unmatched paths are a no-op.
    pub async fn dispatch(&self, path: &str, payload: Payload, store: Arc<StateStore>) {
        let handlers = self.table.match_topic(path);
        if handlers.is_empty() {
            debug!(path, "no handler registered");
            return;
        }
        for handler in handlers {
            handler(path.to_string(), Arc::clone(&payload), Arc::clone(&store)).await;
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
