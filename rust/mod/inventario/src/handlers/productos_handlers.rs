//! Product list handlers: text filter and barcode labels.

use tienda_flux::StateStore;
use tracing::{debug, warn};

use super::InventarioContext;
use crate::request::*;
use crate::state::*;

/// Handle `productos/load`.
pub fn handle_load(req: &LoadProductCardsReq, store: &StateStore) {
    store.set(
        ProductFilter::PATH,
        ProductFilter {
            query: String::new(),
            cards: req.cards.clone(),
        },
    );
}

/// Handle `productos/search`.
pub fn handle_search(req: &SearchProductsReq, store: &StateStore) {
    let needle = req.query.to_lowercase();
    let patched = store.update(ProductFilter::PATH, |filter: &mut ProductFilter| {
        filter.query = req.query.clone();
        for card in &mut filter.cards {
            if card.matches(&needle) {
                card.visible = true;
                card.animation = CardAnimation::FadeIn;
            } else {
                card.visible = false;
                card.animation = CardAnimation::FadeOut;
            }
        }
    });
    if patched.is_none() {
        warn!(state = ProductFilter::PATH, request = SearchProductsReq::PATH, "view state missing, request ignored");
    }
}

/// Handle `productos/etiqueta`.
///
/// A visible label is hidden. A hidden one is fetched and shown, or gets
/// an alt text explaining why there is nothing to show.
pub async fn handle_toggle_label(req: &ToggleLabelReq, store: &StateStore, ctx: &InventarioContext) {
    let (producto, ubicacion) = (req.producto_id.as_str(), req.ubicacion_id.as_str());
    let hidden = store.upsert(LabelPreview::PATH, |p: &mut LabelPreview| {
        let view = p.entry(producto, ubicacion);
        let was_visible = view.visible;
        view.visible = false;
        was_visible
    });
    if hidden == Some(true) {
        debug!(producto, ubicacion, "label hidden");
        return;
    }

    let result = ctx.api.label(producto).await;
    let alt_unavailable = ctx.text("msg/label/unavailable");
    let alt_failed = ctx.text("msg/label/failed");
    store.upsert(LabelPreview::PATH, |p: &mut LabelPreview| {
        let view = p.entry(producto, ubicacion);
        match result {
            Ok(resp) => match resp.imagen {
                Some(imagen) => {
                    view.imagen = Some(imagen);
                    view.visible = true;
                    view.alt.clear();
                }
                None => view.alt = alt_unavailable,
            },
            Err(e) => {
                warn!(producto, error = %e, "label fetch failed");
                view.alt = alt_failed;
            }
        }
    });
}
