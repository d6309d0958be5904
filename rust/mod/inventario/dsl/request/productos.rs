//! Product list requests.

use flux_derive::request;

use crate::state::ProductCard;

/// Cards rendered by the server.
#[request("productos/load")]
pub struct LoadProductCardsReq {
    pub cards: Vec<ProductCard>,
}

/// Search box input.
#[request("productos/search")]
pub struct SearchProductsReq {
    pub query: String,
}

/// Show or hide the barcode label of a product at a location.
#[request("productos/etiqueta")]
pub struct ToggleLabelReq {
    pub producto_id: String,
    pub ubicacion_id: String,
}
