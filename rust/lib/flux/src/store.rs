use std::any::Any;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::topic::TopicTable;
use crate::value::{StateValue, SubscriptionId};

/// Callback type for state change notifications.
pub type ChangeHandler = Arc<dyn Fn(&str, &StateValue) + Send + Sync>;

/// Path-addressed view state with pattern subscriptions.
///
/// Every visible piece of UI (the product form, the transfer board, the
/// notice queue, ...) lives at one path. Handlers replace or patch values;
/// renderers subscribe and repaint.
///
/// - `set(path, value)` stores a value and notifies matching subscribers.
/// - `update(path, f)` patches a typed value in place under the write lock;
///   `upsert` does the same starting from the default when the path is empty.
/// - `get(path)` / `get_as::<T>(path)` read the current value.
/// - `scan(prefix)` lists the children of a path.
///
/// Notifications run synchronously on the calling task, after the write
/// lock has been released.
pub struct StateStore {
    values: RwLock<BTreeMap<String, StateValue>>,
    handlers: TopicTable<HandlerEntry>,
    next_id: AtomicU64,
}

#[derive(Clone)]
struct HandlerEntry {
    id: SubscriptionId,
    handler: ChangeHandler,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            handlers: TopicTable::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Store `value` at `path` and notify subscribers.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        self.set_value(path, StateValue::new(value));
    }

    /// Store a pre-built value at `path` and notify subscribers.
    pub fn set_value(&self, path: &str, value: StateValue) {
        {
            let mut values = self.values.write().unwrap();
            values.insert(path.to_string(), value.clone());
        }
        self.notify(path, &value);
    }

    /// Patch the `T` stored at `path`.
    ///
    /// The closure runs while the write lock is held, so two concurrent
    /// updates of the same path never lose each other's changes. Returns
    /// `None` (and changes nothing) when the path is empty or holds another
    /// type; otherwise returns the closure's result.
    pub fn update<T, R, F>(&self, path: &str, f: F) -> Option<R>
    where
        T: Any + Clone + Send + Sync,
        F: FnOnce(&mut T) -> R,
    {
        let (value, out) = {
            let mut values = self.values.write().unwrap();
            let mut current = values.get(path)?.cloned::<T>()?;
            let out = f(&mut current);
            let value = StateValue::new(current);
            values.insert(path.to_string(), value.clone());
            (value, out)
        };
        self.notify(path, &value);
        Some(out)
    }

    /// Like [`update`](Self::update), starting from `T::default()` when
    /// the path is empty. Returns `None` only when the path holds another
    /// type.
    pub fn upsert<T, R, F>(&self, path: &str, f: F) -> Option<R>
    where
        T: Any + Clone + Default + Send + Sync,
        F: FnOnce(&mut T) -> R,
    {
        let (value, out) = {
            let mut values = self.values.write().unwrap();
            let mut current = match values.get(path) {
                Some(existing) => existing.cloned::<T>()?,
                None => T::default(),
            };
            let out = f(&mut current);
            let value = StateValue::new(current);
            values.insert(path.to_string(), value.clone());
            (value, out)
        };
        self.notify(path, &value);
        Some(out)
    }

    pub fn get(&self, path: &str) -> Option<StateValue> {
        let values = self.values.read().unwrap();
        values.get(path).cloned()
    }

    /// Typed copy of the value at `path`.
    pub fn get_as<T: Any + Clone>(&self, path: &str) -> Option<T> {
        self.get(path).and_then(|v| v.cloned::<T>())
    }

    /// Remove the value at `path`. Subscribers are not notified.
    pub fn remove(&self, path: &str) -> Option<StateValue> {
        let mut values = self.values.write().unwrap();
        values.remove(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        let values = self.values.read().unwrap();
        values.contains_key(path)
    }

    /// Register `handler` for every change on a path matching `pattern`.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.insert(
            pattern,
            HandlerEntry {
                id,
                handler: Arc::new(handler),
            },
        );
        id
    }

    pub fn unsubscribe(&self, pattern: &str, id: SubscriptionId) {
        self.handlers.remove(pattern, |entry| entry.id == id);
    }

    fn notify(&self, path: &str, value: &StateValue) {
        for entry in self.handlers.match_topic(path) {
            (entry.handler)(path, value);
        }
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Board {
        cards: Vec<String>,
    }

    // ========================================================================
    // get / set / remove
    // ========================================================================

    #[test]
    fn set_then_get_struct() {
        let store = StateStore::new();
        store.set(
            "transferencia/board",
            Board {
                cards: vec!["Jabón (x2)".into()],
            },
        );

        let board = store.get_as::<Board>("transferencia/board").unwrap();
        assert_eq!(board.cards, vec!["Jabón (x2)".to_string()]);
    }

    #[test]
    fn get_missing_is_none() {
        let store = StateStore::new();
        assert!(store.get("producto/form").is_none());
        assert!(store.get_as::<Board>("producto/form").is_none());
    }

    #[test]
    fn set_replaces_previous_value_even_of_other_type() {
        let store = StateStore::new();
        store.set("ui/submit", 1u32);
        store.set("ui/submit", "Registrando...".to_string());

        assert!(store.get_as::<u32>("ui/submit").is_none());
        assert_eq!(
            store.get_as::<String>("ui/submit").as_deref(),
            Some("Registrando...")
        );
    }

    #[test]
    fn remove_returns_old_value() {
        let store = StateStore::new();
        store.set("a", 5u32);
        let old = store.remove("a").unwrap();
        assert_eq!(old.downcast_ref::<u32>(), Some(&5));
        assert!(!store.contains("a"));
        assert!(store.remove("a").is_none());
    }

    // ========================================================================
    // update
    // ========================================================================

    #[test]
    fn update_patches_in_place() {
        let store = StateStore::new();
        store.set("board", Board { cards: vec![] });

        let len = store.update("board", |b: &mut Board| {
            b.cards.push("Vela (x1)".into());
            b.cards.len()
        });

        assert_eq!(len, Some(1));
        assert_eq!(store.get_as::<Board>("board").unwrap().cards.len(), 1);
    }

    #[test]
    fn update_missing_path_is_noop() {
        let store = StateStore::new();
        let out = store.update("board", |b: &mut Board| b.cards.len());
        assert!(out.is_none());
        assert!(!store.contains("board"));
    }

    #[test]
    fn update_wrong_type_is_noop() {
        let store = StateStore::new();
        store.set("board", 3u32);
        let out = store.update("board", |b: &mut Board| b.cards.push("x".into()));
        assert!(out.is_none());
        assert_eq!(store.get_as::<u32>("board"), Some(3));
    }

    #[test]
    fn update_notifies_subscribers() {
        let store = StateStore::new();
        store.set("board", Board { cards: vec![] });
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_c = seen.clone();
        store.subscribe("board", move |_, v| {
            let b = v.downcast_ref::<Board>().unwrap();
            seen_c.lock().unwrap().push(b.cards.len());
        });

        store.update("board", |b: &mut Board| b.cards.push("a".into()));
        store.update("board", |b: &mut Board| b.cards.push("b".into()));

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn upsert_starts_from_default() {
        let store = StateStore::new();
        let n = store.upsert("ui/notices", |v: &mut Vec<String>| {
            v.push("uno".into());
            v.len()
        });
        assert_eq!(n, Some(1));
        store.upsert("ui/notices", |v: &mut Vec<String>| v.push("dos".into()));
        assert_eq!(store.get_as::<Vec<String>>("ui/notices").unwrap().len(), 2);
        assert!(store.upsert("ui/notices", |n: &mut u32| *n += 1).is_none());
    }

    // ========================================================================
    // subscriptions
    // ========================================================================

    #[test]
    fn subscriber_sees_matching_paths_only() {
        let store = StateStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_c = seen.clone();
        store.subscribe("ui/#", move |path, _| {
            seen_c.lock().unwrap().push(path.to_string());
        });

        store.set("ui/layout", 1u32);
        store.set("producto/form", 2u32);
        store.set("ui/notices", 3u32);

        assert_eq!(*seen.lock().unwrap(), vec!["ui/layout", "ui/notices"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = StateStore::new();
        let count = Arc::new(AtomicU64::new(0));
        let count_c = count.clone();
        let id = store.subscribe("ui/notices", move |_, _| {
            count_c.fetch_add(1, Ordering::Relaxed);
        });

        store.set("ui/notices", 1u32);
        store.unsubscribe("ui/notices", id);
        store.set("ui/notices", 2u32);

        assert_eq!(count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn subscriber_can_read_store_without_deadlock() {
        let store = Arc::new(StateStore::new());
        let store_c = store.clone();
        let seen = Arc::new(Mutex::new(None));
        let seen_c = seen.clone();
        store.subscribe("board", move |path, _| {
            *seen_c.lock().unwrap() = store_c.get_as::<Board>(path);
        });

        store.set("board", Board { cards: vec![] });
        store.update("board", |b: &mut Board| b.cards.push("x".into()));

        assert_eq!(seen.lock().unwrap().as_ref().unwrap().cards.len(), 1);
    }
}
