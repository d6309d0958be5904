//! Handler implementations and Flux wiring.
//!
//! `register_handlers` binds every `#[request("path")]` type to the
//! function that handles it. Payloads are downcast by `Flux::handle`;
//! a payload of the wrong type is logged and dropped there.

pub mod catalogo_handlers;
pub mod helpers;
pub mod producto_handlers;
pub mod productos_handlers;
pub mod reportes_handlers;
pub mod transferencia_handlers;
pub mod ui_handlers;

#[cfg(test)]
pub(crate) mod fake;

use std::sync::Arc;

use tienda_client::InventoryApi;
use tienda_flux::{Flux, I18nStore, StateStore};

use self::helpers::Sequence;
use crate::request::*;
use crate::state::*;

/// What handlers need beyond the store: the server and the message
/// catalog, plus the lookup and presence sequences.
pub struct InventarioContext {
    pub api: Arc<dyn InventoryApi>,
    pub i18n: Arc<I18nStore>,
    pub(crate) lookups: Sequence,
    pub(crate) presence: Sequence,
}

impl InventarioContext {
    pub fn new(api: Arc<dyn InventoryApi>, i18n: Arc<I18nStore>) -> Arc<Self> {
        Arc::new(Self {
            api,
            i18n,
            lookups: Sequence::default(),
            presence: Sequence::default(),
        })
    }

    pub fn text(&self, path: &str) -> String {
        self.i18n.get(path)
    }
}

/// Register all handlers with a Flux instance.
pub fn register_handlers(flux: &Flux, ctx: Arc<InventarioContext>) {
    flux.store().set(Notices::PATH, Notices::default());

    // ── producto ──

    {
        let ctx = ctx.clone();
        flux.handle(OpenProductFormReq::PATH, move |req: OpenProductFormReq, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                producto_handlers::handle_open(&req, &store, &ctx);
            }
        });
    }

    {
        let ctx = ctx.clone();
        flux.handle(LookupReq::PATH, move |req: LookupReq, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                producto_handlers::handle_lookup(&req, &store, &ctx).await;
            }
        });
    }

    flux.handle(EditFieldReq::PATH, |req: EditFieldReq, store: Arc<StateStore>| async move {
        producto_handlers::handle_edit_field(&req, &store);
    });

    {
        let ctx = ctx.clone();
        flux.handle(SelectLocationReq::PATH, move |req: SelectLocationReq, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                producto_handlers::handle_select_location(&req, &store, &ctx).await;
            }
        });
    }

    {
        let ctx = ctx.clone();
        flux.handle(SubmitProductReq::PATH, move |_: SubmitProductReq, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                producto_handlers::handle_submit(&store, &ctx).await;
            }
        });
    }

    {
        let ctx = ctx.clone();
        flux.handle(ResetProductFormReq::PATH, move |_: ResetProductFormReq, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                producto_handlers::handle_reset(&store, &ctx);
            }
        });
    }

    // ── catalogo ──

    flux.handle(SeedCatalogReq::PATH, |req: SeedCatalogReq, store: Arc<StateStore>| async move {
        catalogo_handlers::handle_seed(&req, &store);
    });

    {
        let ctx = ctx.clone();
        flux.handle(LoadCatalogReq::PATH, move |_: LoadCatalogReq, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                catalogo_handlers::handle_load(&store, &ctx).await;
            }
        });
    }

    // ── transferencia ──

    flux.handle(LoadBoardReq::PATH, |req: LoadBoardReq, store: Arc<StateStore>| async move {
        transferencia_handlers::handle_load(&req, &store);
    });

    flux.handle(DragStartReq::PATH, |req: DragStartReq, store: Arc<StateStore>| async move {
        transferencia_handlers::handle_drag_start(&req, &store);
    });

    flux.handle(DragOverReq::PATH, |req: DragOverReq, store: Arc<StateStore>| async move {
        transferencia_handlers::handle_drag_over(&req, &store);
    });

    flux.handle(DragLeaveReq::PATH, |req: DragLeaveReq, store: Arc<StateStore>| async move {
        transferencia_handlers::handle_drag_leave(&req, &store);
    });

    flux.handle(DragEndReq::PATH, |_: DragEndReq, store: Arc<StateStore>| async move {
        transferencia_handlers::handle_drag_end(&store);
    });

    flux.handle(DropReq::PATH, |req: DropReq, store: Arc<StateStore>| async move {
        transferencia_handlers::handle_drop(&req, &store);
    });

    {
        let ctx = ctx.clone();
        flux.handle(ConfirmTransferReq::PATH, move |req: ConfirmTransferReq, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                transferencia_handlers::handle_confirm(&req, &store, &ctx).await;
            }
        });
    }

    flux.handle(CancelTransferReq::PATH, |_: CancelTransferReq, store: Arc<StateStore>| async move {
        transferencia_handlers::handle_cancel(&store);
    });

    // ── productos ──

    flux.handle(LoadProductCardsReq::PATH, |req: LoadProductCardsReq, store: Arc<StateStore>| async move {
        productos_handlers::handle_load(&req, &store);
    });

    flux.handle(SearchProductsReq::PATH, |req: SearchProductsReq, store: Arc<StateStore>| async move {
        productos_handlers::handle_search(&req, &store);
    });

    {
        let ctx = ctx.clone();
        flux.handle(ToggleLabelReq::PATH, move |req: ToggleLabelReq, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                productos_handlers::handle_toggle_label(&req, &store, &ctx).await;
            }
        });
    }

    // ── reportes ──

    {
        let ctx = ctx.clone();
        flux.handle(OpenReportFilterReq::PATH, move |req: OpenReportFilterReq, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                reportes_handlers::handle_open(&req, &store, &ctx).await;
            }
        });
    }

    {
        let ctx = ctx.clone();
        flux.handle(SelectReportCategoryReq::PATH, move |req: SelectReportCategoryReq, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                reportes_handlers::handle_select_category(&req, &store, &ctx).await;
            }
        });
    }

    flux.handle(SelectReportSubcategoryReq::PATH, |req: SelectReportSubcategoryReq, store: Arc<StateStore>| async move {
        reportes_handlers::handle_select_subcategory(&req, &store);
    });

    // ── ui ──

    flux.handle(InitLayoutReq::PATH, |req: InitLayoutReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_init_layout(&req, &store);
    });

    flux.handle(ScrollReq::PATH, |req: ScrollReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_scroll(&req, &store);
    });

    flux.handle(ResizeReq::PATH, |req: ResizeReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_resize(&req, &store);
    });

    flux.handle(ToggleSidebarReq::PATH, |_: ToggleSidebarReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_toggle_sidebar(&store);
    });

    flux.handle(PinSidebarReq::PATH, |_: PinSidebarReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_pin_sidebar(&store);
    });

    flux.handle(SidebarLinkReq::PATH, |_: SidebarLinkReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_sidebar_link(&store);
    });

    flux.handle(ToggleMenuReq::PATH, |_: ToggleMenuReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_toggle_menu(&store);
    });

    flux.handle(MenuLinkReq::PATH, |_: MenuLinkReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_menu_link(&store);
    });

    flux.handle(ToggleProfileReq::PATH, |_: ToggleProfileReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_toggle_profile(&store);
    });

    flux.handle(DocumentClickReq::PATH, |req: DocumentClickReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_document_click(&req, &store);
    });

    flux.handle(InitSubmitReq::PATH, |req: InitSubmitReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_init_submit(&req, &store);
    });

    {
        let ctx = ctx.clone();
        flux.handle(BeginSubmitReq::PATH, move |_: BeginSubmitReq, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                ui_handlers::begin_submit(&store, &ctx);
            }
        });
    }

    flux.handle(ResetSubmitReq::PATH, |_: ResetSubmitReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_reset_submit(&store);
    });

    flux.handle(DismissNoticeReq::PATH, |_: DismissNoticeReq, store: Arc<StateStore>| async move {
        ui_handlers::handle_dismiss_notice(&store);
    });
}
