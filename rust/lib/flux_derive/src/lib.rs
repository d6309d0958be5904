//! Flux proc macros.
//!
//! - `#[state("path")]` — a view state type stored at a fixed path
//! - `#[request("path")]` — a UI event delivered to handlers at a path
//!
//! Both generate `impl StructName { pub const PATH: &'static str = "the/path"; }`
//! and add the derives the engine relies on: `Debug, Clone` for requests
//! (payloads are cloned out of the router) plus `PartialEq` for states
//! (renderers diff old and new values).

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod expand;

use expand::Kind;

/// Define a view state type.
///
/// ```ignore
/// #[state("transferencia/board")]
/// pub struct TransferBoard {
///     pub zones: Vec<Dropzone>,
/// }
/// ```
#[proc_macro_attribute]
pub fn state(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::ItemStruct);
    expand::expand(Kind::State, attr.into(), item)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Define a request (UI event) type.
///
/// ```ignore
/// #[request("transferencia/drop")]
/// pub struct DropReq {
///     pub destino_id: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn request(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::ItemStruct);
    expand::expand(Kind::Request, attr.into(), item)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
