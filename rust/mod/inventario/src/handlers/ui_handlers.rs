//! Page chrome handlers: layout, menus, submit button and notices.

use tienda_flux::StateStore;
use tracing::{debug, warn};

use super::InventarioContext;
use crate::request::*;
use crate::state::*;

fn patch_layout(store: &StateStore, request: &str, f: impl FnOnce(&mut LayoutState)) {
    if store.update(LayoutState::PATH, f).is_none() {
        warn!(state = LayoutState::PATH, request, "view state missing, request ignored");
    }
}

/// Handle `ui/layout/init`.
pub fn handle_init_layout(req: &InitLayoutReq, store: &StateStore) {
    let mut layout = LayoutState {
        viewport_width: req.viewport_width,
        last_scroll_y: req.scroll_y,
        sidebar_pinned: req.sidebar_pinned,
        ..LayoutState::default()
    };
    if layout.is_desktop() {
        layout.sidebar_top = Some("4rem".to_string());
    }
    store.set(LayoutState::PATH, layout);
}

/// Handle `ui/scroll`.
pub fn handle_scroll(req: &ScrollReq, store: &StateStore) {
    patch_layout(store, ScrollReq::PATH, |l| l.scroll_to(req.y));
}

/// Handle `ui/resize`.
pub fn handle_resize(req: &ResizeReq, store: &StateStore) {
    patch_layout(store, ResizeReq::PATH, |l| {
        l.viewport_width = req.width;
        l.sidebar_top = if l.is_desktop() {
            let top = if l.navbar_hidden { "0" } else { "4rem" };
            Some(top.to_string())
        } else {
            None
        };
    });
}

/// Handle `ui/sidebar/toggle`.
pub fn handle_toggle_sidebar(store: &StateStore) {
    patch_layout(store, ToggleSidebarReq::PATH, |l| l.sidebar_open = !l.sidebar_open);
}

/// Handle `ui/sidebar/pin`. The platform persists `sidebar_pinned`.
pub fn handle_pin_sidebar(store: &StateStore) {
    patch_layout(store, PinSidebarReq::PATH, |l| l.sidebar_pinned = !l.sidebar_pinned);
}

/// Handle `ui/sidebar/link`. Following a link closes the mobile sidebar.
pub fn handle_sidebar_link(store: &StateStore) {
    patch_layout(store, SidebarLinkReq::PATH, |l| {
        if !l.is_desktop() {
            l.sidebar_open = false;
        }
    });
}

/// Handle `ui/menu/toggle`.
pub fn handle_toggle_menu(store: &StateStore) {
    patch_layout(store, ToggleMenuReq::PATH, |l| l.menu_open = !l.menu_open);
}

/// Handle `ui/menu/link`.
pub fn handle_menu_link(store: &StateStore) {
    patch_layout(store, MenuLinkReq::PATH, |l| l.menu_open = false);
}

/// Handle `ui/profile/toggle`.
pub fn handle_toggle_profile(store: &StateStore) {
    patch_layout(store, ToggleProfileReq::PATH, |l| l.profile_open = !l.profile_open);
}

/// Handle `ui/click`. A click outside closes the profile dropdown.
pub fn handle_document_click(req: &DocumentClickReq, store: &StateStore) {
    patch_layout(store, DocumentClickReq::PATH, |l| {
        if l.profile_open && !req.inside_profile {
            l.profile_open = false;
        }
    });
}

/// Handle `ui/submit/init`.
pub fn handle_init_submit(req: &InitSubmitReq, store: &StateStore) {
    store.set(SubmitButton::PATH, SubmitButton::idle(req.text.clone()));
}

/// Disable the submit button and show progress.
pub fn begin_submit(store: &StateStore, ctx: &InventarioContext) {
    let busy = ctx.text("ui/submit/busy");
    if store
        .update(SubmitButton::PATH, |b: &mut SubmitButton| {
            b.disabled = true;
            b.text = busy;
            b.spinner_visible = true;
        })
        .is_none()
    {
        warn!(state = SubmitButton::PATH, "no submit button on the page");
    }
}

/// Handle `ui/submit/reset`.
pub fn handle_reset_submit(store: &StateStore) {
    if store
        .update(SubmitButton::PATH, |b: &mut SubmitButton| {
            *b = SubmitButton::idle(b.idle_text.clone());
        })
        .is_none()
    {
        warn!(state = SubmitButton::PATH, request = ResetSubmitReq::PATH, "view state missing, request ignored");
    }
}

/// Handle `ui/notices/dismiss`.
pub fn handle_dismiss_notice(store: &StateStore) {
    let dismissed = store.update(Notices::PATH, |n: &mut Notices| {
        if n.items.is_empty() {
            None
        } else {
            Some(n.items.remove(0))
        }
    });
    if dismissed.flatten().is_none() {
        debug!("no notice to dismiss");
    }
}
