//! Tienda inventory UI.
//!
//! The browser behaviors of the inventory pages, as Flux handlers over
//! typed view state:
//!
//! - `dsl/state/` — view state stored at well-known paths
//! - `dsl/request/` — UI events, one type per request path
//! - `src/handlers/` — handler implementations + Flux wiring
//! - `src/i18n_strings.rs` — user-facing text
//!
//! ```ignore
//! let flux = Flux::new();
//! let ctx = InventarioContext::new(api, Arc::new(i18n_strings::new_store()));
//! register_handlers(&flux, ctx);
//!
//! flux.emit(OpenProductFormReq::PATH, OpenProductFormReq { ubicacion: Some("2".into()) }).await;
//! flux.emit(LookupReq::PATH, LookupReq { codigo: "750...".into(), trigger: LookupTrigger::Enter }).await;
//! let form = flux.get_as::<ProductForm>(ProductForm::PATH);
//! ```

// View state types — flat access as `crate::state::*`.
#[path = "../dsl/state/mod.rs"]
pub mod state;

// Request types — flat access as `crate::request::*`.
#[path = "../dsl/request/mod.rs"]
pub mod request;

pub mod handlers;
pub mod i18n_strings;

pub use handlers::{register_handlers, InventarioContext};
