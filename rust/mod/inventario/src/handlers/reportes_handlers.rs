//! Report filter handlers.

use tienda_flux::StateStore;
use tracing::{debug, error, warn};

use super::{catalogo_handlers, InventarioContext};
use crate::request::*;
use crate::state::*;

fn option(value: &str, label: String) -> SelectOption {
    SelectOption {
        value: value.to_string(),
        label,
    }
}

/// Handle `reportes/open`.
pub async fn handle_open(req: &OpenReportFilterReq, store: &StateStore, ctx: &InventarioContext) {
    store.set(
        ReportFilter::PATH,
        ReportFilter {
            categoria: req.categoria.clone(),
            subcategoria: req.subcategoria.clone(),
            options: vec![option("", ctx.text("ui/select/all"))],
            status: OptionsStatus::Ready,
        },
    );
    if !req.categoria.is_empty() {
        load_options(&req.categoria, &req.subcategoria, store, ctx).await;
    }
}

/// Handle `reportes/categoria`.
pub async fn handle_select_category(
    req: &SelectReportCategoryReq,
    store: &StateStore,
    ctx: &InventarioContext,
) {
    let patched = store.update(ReportFilter::PATH, |f: &mut ReportFilter| {
        f.categoria = req.categoria.clone();
        f.subcategoria.clear();
    });
    if patched.is_none() {
        warn!(state = ReportFilter::PATH, request = SelectReportCategoryReq::PATH, "view state missing, request ignored");
        return;
    }
    load_options(&req.categoria, "", store, ctx).await;
}

/// Handle `reportes/subcategoria`. Only offered values are accepted.
pub fn handle_select_subcategory(req: &SelectReportSubcategoryReq, store: &StateStore) {
    let accepted = store.update(ReportFilter::PATH, |f: &mut ReportFilter| {
        if f.offers(&req.subcategoria) {
            f.subcategoria = req.subcategoria.clone();
            true
        } else {
            false
        }
    });
    match accepted {
        None => warn!(state = ReportFilter::PATH, request = SelectReportSubcategoryReq::PATH, "view state missing, request ignored"),
        Some(false) => debug!(subcategoria = %req.subcategoria, "subcategory not offered, ignored"),
        Some(true) => {}
    }
}

/// Rebuild the subcategory options for `categoria`, keeping `selected`
/// when it is still offered.
async fn load_options(categoria: &str, selected: &str, store: &StateStore, ctx: &InventarioContext) {
    let all = ctx.text("ui/select/all");
    if categoria.is_empty() {
        store.update(ReportFilter::PATH, |f: &mut ReportFilter| {
            f.options = vec![option("", all)];
            f.subcategoria.clear();
            f.status = OptionsStatus::Ready;
        });
        return;
    }

    let loading = ctx.text("ui/select/loading");
    store.update(ReportFilter::PATH, |f: &mut ReportFilter| {
        f.options = vec![option("", loading)];
        f.status = OptionsStatus::Loading;
    });

    let catalog = catalogo_handlers::ensure_loaded(store, ctx).await;
    let failed = ctx.text("ui/select/failed");
    store.update(ReportFilter::PATH, |f: &mut ReportFilter| {
        if f.categoria != categoria {
            debug!(categoria, current = %f.categoria, "category changed while loading, options discarded");
            return;
        }
        match catalog {
            Ok(catalog) => {
                let mut options = vec![option("", all)];
                options.extend(
                    catalog
                        .children_of(categoria)
                        .map(|e| option(&e.id, e.nombre.clone())),
                );
                f.options = options;
                f.status = OptionsStatus::Ready;
                f.subcategoria = if f.offers(selected) {
                    selected.to_string()
                } else {
                    String::new()
                };
            }
            Err(e) => {
                error!(categoria, error = %e, "loading subcategories failed");
                f.options = vec![option("", failed)];
                f.status = OptionsStatus::Failed;
            }
        }
    });
}
