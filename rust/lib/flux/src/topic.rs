//! Topic patterns for routing requests and state notifications.
//!
//! Paths are `/`-separated levels, e.g. `transferencia/board`. Patterns
//! may use two wildcards:
//! - `+` matches exactly one level (`producto/+` matches `producto/form`)
//! - `#` matches all remaining levels, including none (`ui/#` matches `ui`
//!   and `ui/layout/sidebar`)
//!
//! The number of registered patterns in a page is small (a few dozen
//! handlers), so entries are kept in a flat list in registration order
//! and matched level by level.

use std::sync::RwLock;

/// Whether `pattern` matches the concrete `topic`.
pub fn matches(pattern: &str, topic: &str) -> bool {
    if topic.is_empty() {
        return false;
    }
    let mut topic_levels = topic.split('/');
    for level in pattern.split('/') {
        match level {
            "#" => return true,
            "+" => {
                if topic_levels.next().is_none() {
                    return false;
                }
            }
            exact => match topic_levels.next() {
                Some(t) if t == exact => {}
                _ => return false,
            },
        }
    }
    topic_levels.next().is_none()
}

/// Pattern → value table with wildcard matching.
pub struct TopicTable<T> {
    entries: RwLock<Vec<(String, T)>>,
}

impl<T: Clone> TopicTable<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn insert(&self, pattern: &str, value: T) {
        let mut entries = self.entries.write().unwrap();
        entries.push((pattern.to_string(), value));
    }

    /// All values whose pattern matches `topic`, in registration order.
    pub fn match_topic(&self, topic: &str) -> Vec<T> {
        let entries = self.entries.read().unwrap();
        entries
            .iter()
            .filter(|(pattern, _)| matches(pattern, topic))
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Remove values registered under exactly `pattern` that satisfy
    /// `predicate`. Returns true if anything was removed.
    pub fn remove<F>(&self, pattern: &str, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let mut entries = self.entries.write().unwrap();
        let before = entries.len();
        entries.retain(|(p, v)| !(p == pattern && predicate(v)));
        entries.len() < before
    }
}

impl<T: Clone> Default for TopicTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
