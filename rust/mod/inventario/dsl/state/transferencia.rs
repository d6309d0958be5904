//! Transfer board — stored at `transferencia/board`.
//! Last transfer result — stored at `transferencia/resultado`.

use flux_derive::state;
use serde::{Deserialize, Serialize};

/// Drag-and-drop board: one dropzone per location, each holding the
/// product cards stocked there.
#[state("transferencia/board")]
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferBoard {
    pub zones: Vec<Dropzone>,
    pub drag: DragPhase,
    /// Confirmation modal; `None` when closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<TransferModal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dropzone {
    /// Location this zone stands for (`data-destino`).
    pub ubicacion_id: String,
    pub nombre: String,
    pub cards: Vec<TransferCard>,
    /// Highlighted while a card hovers over it.
    pub emphasized: bool,
}

impl Dropzone {
    pub fn new(ubicacion_id: impl Into<String>, nombre: impl Into<String>) -> Self {
        Self {
            ubicacion_id: ubicacion_id.into(),
            nombre: nombre.into(),
            cards: Vec::new(),
            emphasized: false,
        }
    }

    pub fn with_card(mut self, card: TransferCard) -> Self {
        self.cards.push(card);
        self
    }
}

/// A draggable product card, bound to the location it is stocked at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferCard {
    pub producto_id: String,
    pub origen_id: String,
    pub label: String,
    /// Highlighted while being dragged.
    pub emphasized: bool,
}

impl TransferCard {
    pub fn new(
        producto_id: impl Into<String>,
        origen_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            producto_id: producto_id.into(),
            origen_id: origen_id.into(),
            label: label.into(),
            emphasized: false,
        }
    }

    pub fn is(&self, producto_id: &str, origen_id: &str) -> bool {
        self.producto_id == producto_id && self.origen_id == origen_id
    }
}

/// Where the current drag gesture is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        producto_id: String,
        origen_id: String,
    },
    HoverTarget {
        producto_id: String,
        origen_id: String,
        destino_id: String,
    },
}

/// A validated move of one product between two distinct locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferIntent {
    pub producto_id: String,
    pub origen_id: String,
    pub destino_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    #[error("drop carries no product")]
    MissingProducto,
    #[error("drop carries no origin location")]
    MissingOrigen,
    #[error("dropzone has no destination location")]
    MissingDestino,
    #[error("origin and destination are the same location")]
    SameLocation,
}

impl TransferIntent {
    /// Validate the raw drop payload. Blank ids count as missing.
    pub fn new(
        producto_id: Option<&str>,
        origen_id: Option<&str>,
        destino_id: Option<&str>,
    ) -> Result<Self, IntentError> {
        let producto_id = present(producto_id).ok_or(IntentError::MissingProducto)?;
        let origen_id = present(origen_id).ok_or(IntentError::MissingOrigen)?;
        let destino_id = present(destino_id).ok_or(IntentError::MissingDestino)?;
        if same_location(origen_id, destino_id) {
            return Err(IntentError::SameLocation);
        }
        Ok(Self {
            producto_id: producto_id.to_string(),
            origen_id: origen_id.to_string(),
            destino_id: destino_id.to_string(),
        })
    }
}

fn present(id: Option<&str>) -> Option<&str> {
    id.map(str::trim).filter(|s| !s.is_empty())
}

/// Location ids are compared as integers when both parse, so `"3"` and
/// `"03"` name the same zone.
fn same_location(a: &str, b: &str) -> bool {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x == y,
        _ => a == b,
    }
}

/// The confirmation modal, pre-filled from a drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferModal {
    pub intent: TransferIntent,
    /// A confirmation is in flight.
    pub committing: bool,
}

/// Outcome of the last confirmed transfer.
#[state("transferencia/resultado")]
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<TransferOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TransferOutcome {
    /// The server moved the stock; the board was patched as instructed.
    Committed {
        intent: TransferIntent,
        removed_card: bool,
        added_card: bool,
    },
    /// The server refused the move.
    Rejected {
        intent: TransferIntent,
        errors: Vec<String>,
    },
    /// The request never produced an answer.
    Failed {
        intent: TransferIntent,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_requires_every_id() {
        assert_eq!(
            TransferIntent::new(None, Some("1"), Some("2")),
            Err(IntentError::MissingProducto)
        );
        assert_eq!(
            TransferIntent::new(Some("41"), Some("  "), Some("2")),
            Err(IntentError::MissingOrigen)
        );
        assert_eq!(
            TransferIntent::new(Some("41"), Some("1"), None),
            Err(IntentError::MissingDestino)
        );
    }

    #[test]
    fn intent_rejects_same_location() {
        assert_eq!(
            TransferIntent::new(Some("41"), Some("3"), Some("3")),
            Err(IntentError::SameLocation)
        );
        assert_eq!(
            TransferIntent::new(Some("41"), Some("3"), Some("03")),
            Err(IntentError::SameLocation)
        );
    }

    #[test]
    fn large_ids_stay_distinct() {
        let intent =
            TransferIntent::new(Some("41"), Some("9007199254740993"), Some("9007199254740992"));
        assert!(intent.is_ok());
    }

    #[test]
    fn intent_accepts_distinct_locations() {
        let intent = TransferIntent::new(Some("41"), Some("1"), Some("2")).unwrap();
        assert_eq!(intent.producto_id, "41");
        assert_eq!(intent.origen_id, "1");
        assert_eq!(intent.destino_id, "2");
    }

    #[test]
    fn non_numeric_locations_compare_as_text() {
        assert!(TransferIntent::new(Some("41"), Some("bodega"), Some("tienda")).is_ok());
        assert_eq!(
            TransferIntent::new(Some("41"), Some("bodega"), Some("bodega")),
            Err(IntentError::SameLocation)
        );
    }
}
