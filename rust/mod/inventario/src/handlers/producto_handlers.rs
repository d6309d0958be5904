//! Product registration handlers: barcode lookup, presence check and the
//! submit guard.

use tienda_client::LookupResponse;
use tienda_flux::StateStore;
use tracing::{debug, error, warn};

use super::helpers::{push_notice, require, text};
use super::{ui_handlers, InventarioContext};
use crate::request::*;
use crate::state::*;

/// Handle `producto/open`.
pub fn handle_open(req: &OpenProductFormReq, store: &StateStore, ctx: &InventarioContext) {
    let mut form = ProductForm::empty(req.ubicacion.clone());
    apply_mode(&mut form, SubmitMode::RegisterNew, ctx);
    store.set(SubmitButton::PATH, SubmitButton::idle(form.submit_label.clone()));
    store.set(ProductForm::PATH, form);
    store.set(LookupStatus::PATH, LookupStatus::default());
}

/// Handle `producto/reset`.
pub fn handle_reset(store: &StateStore, ctx: &InventarioContext) {
    let Some(form) = require::<ProductForm>(store, ProductForm::PATH, ResetProductFormReq::PATH)
    else {
        return;
    };
    // Nothing in flight may land on the cleared form.
    ctx.lookups.invalidate();
    ctx.presence.invalidate();

    let mut fresh = ProductForm::empty(form.ubicacion);
    apply_mode(&mut fresh, SubmitMode::RegisterNew, ctx);
    store.set(SubmitButton::PATH, SubmitButton::idle(fresh.submit_label.clone()));
    store.set(ProductForm::PATH, fresh);
    store.set(LookupStatus::PATH, LookupStatus::default());
    store.remove(FormSubmission::PATH);
}

/// Handle `producto/lookup`.
pub async fn handle_lookup(req: &LookupReq, store: &StateStore, ctx: &InventarioContext) {
    let codigo = req.codigo.clone();
    let nombre = store.update(ProductForm::PATH, |f: &mut ProductForm| {
        f.codigo = codigo;
        f.nombre.value.clone()
    });
    let Some(nombre) = nombre else {
        warn!(state = ProductForm::PATH, request = LookupReq::PATH, "view state missing, request ignored");
        return;
    };
    if req.trigger == LookupTrigger::Blur && !nombre.is_empty() {
        debug!(codigo = %req.codigo, "name already filled, blur lookup skipped");
        return;
    }
    lookup(&req.codigo, store, ctx).await;
}

/// Look `codigo` up and reconcile the form with the answer.
///
/// Returns `None` when nothing was looked up or the response was stale.
pub async fn lookup(
    codigo: &str,
    store: &StateStore,
    ctx: &InventarioContext,
) -> Option<LookupOutcome> {
    if codigo.is_empty() {
        debug!("empty barcode, lookup skipped");
        return None;
    }
    require::<ProductForm>(store, ProductForm::PATH, LookupReq::PATH)?;

    let ticket = ctx.lookups.next();
    store.upsert(LookupStatus::PATH, |s: &mut LookupStatus| s.searching = true);

    let result = ctx.api.lookup(codigo).await;
    if !ctx.lookups.is_current(ticket) {
        debug!(codigo, ticket, "stale lookup response discarded");
        return None;
    }

    let mut presence = None;
    let outcome = match result {
        Ok(resp) if !resp.existe => {
            push_notice(store, NoticeKind::Info, ctx.text("msg/lookup/not_found"));
            LookupOutcome::NotFound {
                codigo: codigo.to_string(),
            }
        }
        Ok(resp) => {
            let applied = fill_form(store, &resp);
            let producto_id = applied.as_ref().and_then(|(p, _)| p.clone());
            if let Some((Some(producto), Some(ubicacion))) = applied {
                presence = Some((producto, ubicacion));
            }
            LookupOutcome::Found {
                codigo: codigo.to_string(),
                producto_id,
            }
        }
        Err(e) => {
            error!(codigo, error = %e, "product lookup failed");
            push_notice(store, NoticeKind::Error, ctx.text("msg/lookup/failed"));
            LookupOutcome::Failed {
                codigo: codigo.to_string(),
                message: e.to_string(),
            }
        }
    };

    store.set(
        LookupStatus::PATH,
        LookupStatus {
            searching: false,
            last: Some(outcome.clone()),
        },
    );

    if let Some((producto, ubicacion)) = presence {
        check_presence(&producto, &ubicacion, store, ctx).await;
    }
    Some(outcome)
}

/// Populate and lock every mapped field from a found product.
/// Returns the stored product id and the selected location.
fn fill_form(
    store: &StateStore,
    resp: &LookupResponse,
) -> Option<(Option<String>, Option<String>)> {
    let catalog = store
        .get_as::<SubcategoryCatalog>(SubcategoryCatalog::PATH)
        .unwrap_or_default();
    if !catalog.loaded {
        debug!("subcategory catalog not loaded, options left empty");
    }

    let padre = text(&resp.categoria_padre_id);
    let options: Vec<SelectOption> = catalog
        .children_of(&padre)
        .map(|e| SelectOption {
            value: e.id.clone(),
            label: e.nombre.clone(),
        })
        .collect();
    let subcategoria = text(&resp.subcategoria_id);
    let subcategoria = if options.iter().any(|o| o.value == subcategoria) {
        subcategoria
    } else {
        String::new()
    };

    let atributos = resp
        .atributos
        .iter()
        .map(|a| AttributeRow {
            nombre: a.nombre.clone(),
            valor: a.valor.clone().unwrap_or_default(),
        })
        .collect();

    store.update(ProductForm::PATH, |form: &mut ProductForm| {
        form.nombre = FormField::locked(resp.nombre.clone().unwrap_or_default());
        form.descripcion = FormField::locked(resp.descripcion.clone().unwrap_or_default());
        form.precio_mayoreo = FormField::locked(text(&resp.precio_mayoreo));
        form.precio_menudeo = FormField::locked(text(&resp.precio_menudeo));
        form.precio_docena = FormField::locked(text(&resp.precio_docena));
        form.tipo_codigo = FormField::locked(resp.tipo_codigo.clone().unwrap_or_default());
        form.dueno = FormField::locked(text(&resp.dueno_id));
        form.categoria_padre = FormField::locked(padre);
        form.subcategoria = FormField::locked(subcategoria);
        form.subcategorias = options;
        form.atributos = atributos;
        form.producto_id = resp.producto_id.as_ref().map(|id| id.to_string());
        form.focus = Some(FocusTarget::CantidadInicial);
        (form.producto_id.clone(), form.ubicacion.clone())
    })
}

/// Ask whether `producto` is stocked at `ubicacion` and switch the submit
/// mode accordingly. Failures keep the current mode.
pub async fn check_presence(
    producto: &str,
    ubicacion: &str,
    store: &StateStore,
    ctx: &InventarioContext,
) {
    if producto.is_empty() || ubicacion.is_empty() {
        return;
    }
    let ticket = ctx.presence.next();
    let result = ctx.api.presence(producto, ubicacion).await;
    if !ctx.presence.is_current(ticket) {
        debug!(producto, ubicacion, ticket, "stale presence response discarded");
        return;
    }
    match result {
        Ok(resp) => {
            let mode = if resp.existe {
                SubmitMode::AddToExisting {
                    producto: producto.to_string(),
                    ubicacion: ubicacion.to_string(),
                }
            } else {
                SubmitMode::RegisterNew
            };
            set_mode(store, ctx, mode);
        }
        Err(e) => {
            warn!(producto, ubicacion, error = %e, "inventory presence check failed, mode unchanged");
        }
    }
}

/// Handle `producto/ubicacion`.
pub async fn handle_select_location(
    req: &SelectLocationReq,
    store: &StateStore,
    ctx: &InventarioContext,
) {
    let ubicacion = req.ubicacion.clone();
    let producto = store.update(ProductForm::PATH, |f: &mut ProductForm| {
        f.ubicacion = ubicacion;
        f.producto_id.clone()
    });
    let Some(producto) = producto else {
        warn!(state = ProductForm::PATH, request = SelectLocationReq::PATH, "view state missing, request ignored");
        return;
    };
    if let (Some(producto), Some(ubicacion)) = (producto, req.ubicacion.as_deref()) {
        check_presence(&producto, ubicacion, store, ctx).await;
    }
}

/// Handle `producto/field`. Locked fields ignore edits.
pub fn handle_edit_field(req: &EditFieldReq, store: &StateStore) {
    let value = req.value.clone();
    let applied = store.update(ProductForm::PATH, |f: &mut ProductForm| {
        let field = f.field_mut(req.field);
        if field.locked {
            return false;
        }
        field.value = value;
        true
    });
    match applied {
        None => warn!(state = ProductForm::PATH, request = EditFieldReq::PATH, "view state missing, request ignored"),
        Some(false) => debug!(field = ?req.field, "field locked, edit ignored"),
        Some(true) => {}
    }
}

/// Handle `producto/submit`.
///
/// A form with a barcode but no name is held while the barcode is looked
/// up; it goes through only if the lookup filled the name.
pub async fn handle_submit(store: &StateStore, ctx: &InventarioContext) {
    let Some(form) = require::<ProductForm>(store, ProductForm::PATH, SubmitProductReq::PATH)
    else {
        return;
    };

    let outcome = if form.nombre.value.is_empty() && !form.codigo.is_empty() {
        lookup(&form.codigo, store, ctx).await;
        let filled = store
            .get_as::<ProductForm>(ProductForm::PATH)
            .map(|f| !f.nombre.value.is_empty())
            .unwrap_or(false);
        if filled {
            SubmissionOutcome::Resubmitted
        } else {
            SubmissionOutcome::Dropped
        }
    } else {
        SubmissionOutcome::Native
    };

    let action = store
        .get_as::<ProductForm>(ProductForm::PATH)
        .map(|f| f.action)
        .unwrap_or(form.action);
    store.set(FormSubmission::PATH, FormSubmission { outcome, action });

    if outcome.proceeds() {
        ui_handlers::begin_submit(store, ctx);
    } else {
        debug!(codigo = %form.codigo, "lookup left the name empty, submission dropped");
    }
}

/// Point the form and its button at `mode`.
pub fn apply_mode(form: &mut ProductForm, mode: SubmitMode, ctx: &InventarioContext) {
    let endpoints = ctx.api.endpoints();
    match &mode {
        SubmitMode::RegisterNew => {
            form.action = endpoints.register_product.clone();
            form.submit_label = ctx.text("ui/submit/register");
            form.submit_tone = ButtonTone::Red;
        }
        SubmitMode::AddToExisting { producto, ubicacion } => {
            form.action = endpoints.add_inventory_for(producto, ubicacion);
            form.submit_label = ctx.text("ui/submit/add");
            form.submit_tone = ButtonTone::Green;
        }
    }
    form.mode = mode;
}

fn set_mode(store: &StateStore, ctx: &InventarioContext, mode: SubmitMode) {
    let label = store.update(ProductForm::PATH, |f: &mut ProductForm| {
        apply_mode(f, mode, ctx);
        f.submit_label.clone()
    });
    let Some(label) = label else {
        warn!(state = ProductForm::PATH, "form gone before presence check finished");
        return;
    };
    store.update(SubmitButton::PATH, |b: &mut SubmitButton| {
        if !b.disabled {
            b.text = label.clone();
        }
        b.idle_text = label;
    });
}
