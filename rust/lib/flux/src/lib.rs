//! Flux — the UI state engine behind the Tienda pages.
//!
//! A path-based state machine with pub/sub. Rust owns the state of every
//! page (product form, transfer board, filters, layout); the rendering
//! platform only paints what it reads and reports user events back as
//! requests.
//!
//! # Three Primitives
//!
//! - `get(path)` — read view state at a path (Arc, no data copy)
//! - `emit(path, payload)` — deliver a UI event to its handler(s)
//! - `subscribe(pattern)` — observe view state changes
//!
//! # Path Addressing
//!
//! State and requests share one `/`-separated namespace:
//! - State: `producto/form`, `transferencia/board`, `ui/notices`
//! - Requests: `producto/lookup`, `transferencia/drop`, `layout/scroll`
//!
//! Patterns accept `+` (one level) and `#` (the remaining levels).

pub mod app;
pub mod i18n;
pub mod router;
pub mod store;
pub mod topic;
pub mod value;

pub use app::Flux;
pub use i18n::{I18nStore, Params, Translator};
pub use router::{BoxFuture, Payload, Router};
pub use store::{ChangeHandler, StateStore};
pub use value::{StateValue, SubscriptionId};
