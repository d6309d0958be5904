use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A type-erased, reference-counted view state value.
///
/// Each path in the store holds one of these. Cloning only bumps the
/// reference count, so renderers can hold on to a snapshot while handlers
/// keep replacing the value at the same path.
#[derive(Clone)]
pub struct StateValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl StateValue {
    /// Wrap any `Send + Sync` value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow the value as `T`, or `None` if it holds another type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Clone the value out as `T`.
    ///
    /// Handlers use this for read-modify-write of view state: take a copy,
    /// patch it, store it back.
    pub fn cloned<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    /// Rust type name of the stored value, for logs.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Number of live handles to the same value.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl fmt::Debug for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateValue")
            .field("type", &self.type_name)
            .finish()
    }
}

/// Handle returned by `StateStore::subscribe()`; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Zone {
        id: String,
        cards: Vec<String>,
    }

    #[test]
    fn downcast_matching_type() {
        let v = StateValue::new(Zone {
            id: "3".into(),
            cards: vec!["Jabón (x4)".into()],
        });
        let zone = v.downcast_ref::<Zone>().unwrap();
        assert_eq!(zone.id, "3");
        assert_eq!(zone.cards.len(), 1);
    }

    #[test]
    fn downcast_wrong_type_is_none() {
        let v = StateValue::new(7u32);
        assert!(v.downcast_ref::<i32>().is_none());
        assert!(v.downcast_ref::<String>().is_none());
        assert!(v.is::<u32>());
    }

    #[test]
    fn cloned_returns_independent_copy() {
        let v = StateValue::new(Zone {
            id: "1".into(),
            cards: vec![],
        });
        let mut copy = v.cloned::<Zone>().unwrap();
        copy.cards.push("nueva".into());

        assert!(v.downcast_ref::<Zone>().unwrap().cards.is_empty());
        assert_eq!(copy.cards, vec!["nueva".to_string()]);
    }

    #[test]
    fn clone_shares_allocation() {
        let v = StateValue::new("Agregar inventario".to_string());
        let w = v.clone();
        assert_eq!(v.ref_count(), 2);
        drop(w);
        assert_eq!(v.ref_count(), 1);
    }

    #[test]
    fn debug_shows_type_name() {
        let v = StateValue::new(1u8);
        assert!(format!("{:?}", v).contains("u8"));
        assert_eq!(v.type_id(), TypeId::of::<u8>());
    }
}
