//! Shared helpers for handlers.

use std::sync::atomic::{AtomicU64, Ordering};

use tienda_client::{wire, CategoriesResponse};
use tienda_flux::StateStore;
use tracing::warn;

use crate::state::*;

/// Monotonic request tickets. A response is applied only while its
/// ticket is still the newest one handed out.
#[derive(Debug, Default)]
pub struct Sequence(AtomicU64);

impl Sequence {
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Queue a user-facing notice.
pub fn push_notice(store: &StateStore, kind: NoticeKind, text: String) {
    store.upsert(Notices::PATH, |n: &mut Notices| {
        n.items.push(Notice { kind, text });
    });
}

/// Typed copy of the state at `path`, logging when the page never
/// seeded it.
pub fn require<T>(store: &StateStore, path: &str, request: &str) -> Option<T>
where
    T: std::any::Any + Clone,
{
    let value = store.get_as::<T>(path);
    if value.is_none() {
        warn!(state = path, request, "view state missing, request ignored");
    }
    value
}

/// Flatten the category tree into `(id, nombre, padre)` entries.
pub fn catalog_from_tree(tree: &CategoriesResponse) -> SubcategoryCatalog {
    let entries = tree
        .categorias_padre
        .iter()
        .flat_map(|parent| {
            parent.subcategorias.iter().map(move |sub| {
                SubcategoryEntry::new(sub.id.as_str(), sub.nombre.clone(), parent.id.as_str())
            })
        })
        .collect();
    SubcategoryCatalog::with_entries(entries)
}

pub fn text(value: &Option<wire::Scalar>) -> String {
    wire::text_or_empty(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_makes_older_stale() {
        let seq = Sequence::default();
        let first = seq.next();
        assert!(seq.is_current(first));
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        seq.invalidate();
        assert!(!seq.is_current(second));
    }

    #[test]
    fn notices_created_on_first_push() {
        let store = StateStore::new();
        push_notice(&store, NoticeKind::Info, "uno".into());
        push_notice(&store, NoticeKind::Error, "dos".into());
        let notices = store.get_as::<Notices>(Notices::PATH).unwrap();
        assert_eq!(notices.items.len(), 2);
        assert_eq!(notices.last_text(), Some("dos"));
    }

    #[test]
    fn tree_flattens_in_source_order() {
        let tree: CategoriesResponse = serde_json::from_str(
            r#"{"categorias_padre": [
                {"id": 1, "nombre": "Higiene", "subcategorias": [{"id": 11, "nombre": "Jabones"}, {"id": 12, "nombre": "Shampoo"}]},
                {"id": 2, "nombre": "Velas", "subcategorias": [{"id": 21, "nombre": "Aromáticas"}]}
            ]}"#,
        )
        .unwrap();
        let catalog = catalog_from_tree(&tree);
        assert!(catalog.loaded);
        let ids: Vec<&str> = catalog.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["11", "12", "21"]);
        assert_eq!(catalog.entries[2].padre, "2");
    }
}
