//! Category catalog handlers.

use tienda_flux::StateStore;
use tracing::{debug, warn};

use super::helpers::catalog_from_tree;
use super::InventarioContext;
use crate::request::*;
use crate::state::*;

/// Handle `catalogo/seed`.
pub fn handle_seed(req: &SeedCatalogReq, store: &StateStore) {
    store.set(
        SubcategoryCatalog::PATH,
        SubcategoryCatalog::with_entries(req.entries.clone()),
    );
}

/// Handle `catalogo/load`.
pub async fn handle_load(store: &StateStore, ctx: &InventarioContext) {
    if let Err(e) = ensure_loaded(store, ctx).await {
        warn!(error = %e, "category tree fetch failed, catalog unchanged");
    }
}

/// The catalog, fetched from the server on first use.
pub async fn ensure_loaded(
    store: &StateStore,
    ctx: &InventarioContext,
) -> Result<SubcategoryCatalog, tienda_client::ApiError> {
    if let Some(catalog) = store.get_as::<SubcategoryCatalog>(SubcategoryCatalog::PATH) {
        if catalog.loaded {
            debug!(entries = catalog.entries.len(), "category catalog cached");
            return Ok(catalog);
        }
    }
    let tree = ctx.api.categories().await?;
    let catalog = catalog_from_tree(&tree);
    store.set(SubcategoryCatalog::PATH, catalog.clone());
    Ok(catalog)
}
