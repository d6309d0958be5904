//! Transfer board requests.

use flux_derive::request;

use crate::state::Dropzone;

/// Zones and cards rendered by the server.
#[request("transferencia/load")]
pub struct LoadBoardReq {
    pub zones: Vec<Dropzone>,
}

#[request("transferencia/drag/start")]
pub struct DragStartReq {
    pub producto_id: String,
    pub origen_id: String,
}

#[request("transferencia/drag/over")]
pub struct DragOverReq {
    pub destino_id: String,
}

#[request("transferencia/drag/leave")]
pub struct DragLeaveReq {
    pub destino_id: String,
}

#[request("transferencia/drag/end")]
pub struct DragEndReq;

/// A card was released over a zone. Ids come from the drag payload and
/// the zone and may be missing.
#[request("transferencia/drop")]
pub struct DropReq {
    pub producto_id: Option<String>,
    pub origen_id: Option<String>,
    pub destino_id: Option<String>,
}

/// Confirm the modal. Carries the inputs the modal collected.
#[request("transferencia/confirm")]
pub struct ConfirmTransferReq {
    pub cantidad: String,
    pub extra: Vec<(String, String)>,
}

#[request("transferencia/cancel")]
pub struct CancelTransferReq;
