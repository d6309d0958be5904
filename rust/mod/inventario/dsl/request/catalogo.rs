//! Category catalog requests.

use flux_derive::request;

use crate::state::SubcategoryEntry;

/// Subcategories embedded in the rendered page.
#[request("catalogo/seed")]
pub struct SeedCatalogReq {
    pub entries: Vec<SubcategoryEntry>,
}

/// Fetch the category tree from the server.
#[request("catalogo/load")]
pub struct LoadCatalogReq;
