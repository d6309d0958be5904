//! Transfer board handlers: drag gesture, confirmation modal and the
//! board patch after a confirmed transfer.

use tienda_client::{TransferForm, TransferResponse};
use tienda_flux::{Params, StateStore};
use tracing::{debug, error, info, warn};

use super::helpers::{push_notice, text};
use super::InventarioContext;
use crate::request::*;
use crate::state::*;

fn patch_board<R>(store: &StateStore, request: &str, f: impl FnOnce(&mut TransferBoard) -> R) -> Option<R> {
    let out = store.update(TransferBoard::PATH, f);
    if out.is_none() {
        warn!(state = TransferBoard::PATH, request, "view state missing, request ignored");
    }
    out
}

/// Handle `transferencia/load`.
pub fn handle_load(req: &LoadBoardReq, store: &StateStore) {
    store.set(
        TransferBoard::PATH,
        TransferBoard {
            zones: req.zones.clone(),
            drag: DragPhase::Idle,
            modal: None,
        },
    );
}

/// Handle `transferencia/drag/start`.
pub fn handle_drag_start(req: &DragStartReq, store: &StateStore) {
    patch_board(store, DragStartReq::PATH, |board| {
        for card in board.zones.iter_mut().flat_map(|z| z.cards.iter_mut()) {
            card.emphasized = card.is(&req.producto_id, &req.origen_id);
        }
        board.drag = DragPhase::Dragging {
            producto_id: req.producto_id.clone(),
            origen_id: req.origen_id.clone(),
        };
    });
}

/// Handle `transferencia/drag/over`.
pub fn handle_drag_over(req: &DragOverReq, store: &StateStore) {
    patch_board(store, DragOverReq::PATH, |board| {
        for zone in &mut board.zones {
            zone.emphasized = zone.ubicacion_id == req.destino_id;
        }
        board.drag = match std::mem::take(&mut board.drag) {
            DragPhase::Dragging { producto_id, origen_id }
            | DragPhase::HoverTarget { producto_id, origen_id, .. } => DragPhase::HoverTarget {
                producto_id,
                origen_id,
                destino_id: req.destino_id.clone(),
            },
            DragPhase::Idle => DragPhase::Idle,
        };
    });
}

/// Handle `transferencia/drag/leave`.
pub fn handle_drag_leave(req: &DragLeaveReq, store: &StateStore) {
    patch_board(store, DragLeaveReq::PATH, |board| {
        if let Some(zone) = board.zones.iter_mut().find(|z| z.ubicacion_id == req.destino_id) {
            zone.emphasized = false;
        }
        board.drag = match std::mem::take(&mut board.drag) {
            DragPhase::HoverTarget { producto_id, origen_id, destino_id }
                if destino_id == req.destino_id =>
            {
                DragPhase::Dragging { producto_id, origen_id }
            }
            other => other,
        };
    });
}

/// Handle `transferencia/drag/end`.
pub fn handle_drag_end(store: &StateStore) {
    patch_board(store, DragEndReq::PATH, |board| {
        for card in board.zones.iter_mut().flat_map(|z| z.cards.iter_mut()) {
            card.emphasized = false;
        }
        board.drag = DragPhase::Idle;
    });
}

/// Handle `transferencia/drop`.
///
/// Only a drop that forms a valid [`TransferIntent`] opens the modal; any
/// other drop just clears the hover state.
pub fn handle_drop(req: &DropReq, store: &StateStore) {
    let intent = TransferIntent::new(
        req.producto_id.as_deref(),
        req.origen_id.as_deref(),
        req.destino_id.as_deref(),
    );
    patch_board(store, DropReq::PATH, |board| {
        for zone in &mut board.zones {
            zone.emphasized = false;
        }
        board.drag = DragPhase::Idle;

        let intent = match intent {
            Ok(intent) => intent,
            Err(reason) => {
                debug!(%reason, "drop ignored");
                return;
            }
        };
        if board.modal.as_ref().is_some_and(|m| m.committing) {
            debug!("transfer in flight, drop ignored");
            return;
        }
        board.modal = Some(TransferModal {
            intent,
            committing: false,
        });
    });
}

/// Handle `transferencia/cancel`. A modal whose transfer is in flight
/// stays open until the server answers.
pub fn handle_cancel(store: &StateStore) {
    patch_board(store, CancelTransferReq::PATH, |board| {
        if board.modal.as_ref().is_some_and(|m| m.committing) {
            debug!("transfer in flight, cancel ignored");
            return;
        }
        board.modal = None;
    });
}

/// Handle `transferencia/confirm`.
///
/// The board changes only as the server instructs: `remove_card` drops
/// the origin card, `add_card` adds one under the destination zone.
pub async fn handle_confirm(req: &ConfirmTransferReq, store: &StateStore, ctx: &InventarioContext) {
    let intent = patch_board(store, ConfirmTransferReq::PATH, |board| match board.modal.as_mut() {
        Some(modal) if !modal.committing => {
            modal.committing = true;
            Some(modal.intent.clone())
        }
        _ => None,
    });
    let Some(intent) = intent.flatten() else {
        debug!("no open transfer modal, confirm ignored");
        return;
    };

    let form = TransferForm {
        producto_id: intent.producto_id.clone(),
        origen_id: intent.origen_id.clone(),
        destino_id: intent.destino_id.clone(),
        cantidad: req.cantidad.clone(),
        extra: req.extra.clone(),
    };

    let outcome = match ctx.api.transfer(&form).await {
        Ok(resp) if resp.success => {
            let (removed_card, added_card) = apply_transfer(store, ctx, &intent, &resp);
            info!(
                producto = %intent.producto_id,
                origen = %intent.origen_id,
                destino = %intent.destino_id,
                removed_card,
                added_card,
                "transfer committed"
            );
            push_notice(store, NoticeKind::Success, ctx.text("msg/transfer/done"));
            TransferOutcome::Committed {
                intent,
                removed_card,
                added_card,
            }
        }
        Ok(resp) => {
            release_modal(store, &intent);
            let errors = resp.errors.join(", ");
            let message = ctx
                .i18n
                .format("format/transfer/rejected", &Params::new(&[("errors", errors.as_str())]));
            push_notice(store, NoticeKind::Error, message);
            TransferOutcome::Rejected {
                intent,
                errors: resp.errors,
            }
        }
        Err(e) => {
            error!(producto = %intent.producto_id, error = %e, "transfer request failed");
            release_modal(store, &intent);
            push_notice(store, NoticeKind::Error, ctx.text("msg/transfer/failed"));
            TransferOutcome::Failed {
                intent,
                message: e.to_string(),
            }
        }
    };

    store.set(TransferStatus::PATH, TransferStatus { last: Some(outcome) });
}

/// Patch the board after a successful transfer and close the modal if it
/// still holds `intent`.
/// Returns whether a card was removed and whether one was added.
fn apply_transfer(
    store: &StateStore,
    ctx: &InventarioContext,
    intent: &TransferIntent,
    resp: &TransferResponse,
) -> (bool, bool) {
    // The response names the ids the server actually used.
    let producto = or_intent(text(&resp.producto_id), &intent.producto_id);
    let origen = or_intent(text(&resp.origen_id), &intent.origen_id);
    let destino = or_intent(text(&resp.destino_id), &intent.destino_id);
    let label = ctx.i18n.format(
        "format/transfer/card",
        &Params::new(&[
            ("nombre", resp.producto_nombre.as_deref().unwrap_or("")),
            ("cantidad", text(&resp.cantidad).as_str()),
        ]),
    );

    let patched = store.update(TransferBoard::PATH, |board: &mut TransferBoard| {
        let mut removed = false;
        if resp.remove_card {
            for zone in &mut board.zones {
                let before = zone.cards.len();
                zone.cards.retain(|c| !c.is(&producto, &origen));
                removed |= zone.cards.len() != before;
            }
        }

        let mut added = false;
        if resp.add_card {
            match board.zones.iter_mut().find(|z| z.ubicacion_id == destino) {
                Some(zone) => {
                    zone.cards.push(TransferCard::new(&producto, &destino, label));
                    added = true;
                }
                None => warn!(destino = %destino, "destination zone not on the board, card not added"),
            }
        }

        if board.modal.as_ref().is_some_and(|m| m.intent == *intent) {
            board.modal = None;
        }
        (removed, added)
    });
    patched.unwrap_or_else(|| {
        warn!(state = TransferBoard::PATH, "board gone before transfer finished");
        (false, false)
    })
}

fn or_intent(from_response: String, from_intent: &str) -> String {
    if from_response.is_empty() {
        from_intent.to_string()
    } else {
        from_response
    }
}

/// Keep the modal open for another attempt.
fn release_modal(store: &StateStore, intent: &TransferIntent) {
    store.update(TransferBoard::PATH, |board: &mut TransferBoard| {
        if let Some(modal) = board.modal.as_mut().filter(|m| m.intent == *intent) {
            modal.committing = false;
        }
    });
}
