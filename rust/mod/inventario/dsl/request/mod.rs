//! Request (UI event) definitions.
//!
//! Each file defines the events a page emits for one feature.
//! `#[request("path")]` generates the `PATH` const.

pub mod catalogo;
pub mod producto;
pub mod productos;
pub mod reportes;
pub mod transferencia;
pub mod ui;

pub use catalogo::*;
pub use producto::*;
pub use productos::*;
pub use reportes::*;
pub use transferencia::*;
pub use ui::*;
