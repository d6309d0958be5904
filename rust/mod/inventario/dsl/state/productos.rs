//! Product list filter — stored at `productos/filtro`.
//! Barcode label previews — stored at `productos/etiquetas`.

use base64::Engine as _;
use flux_derive::state;
use serde::{Deserialize, Serialize};

#[state("productos/filtro")]
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub query: String,
    pub cards: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub producto_id: String,
    pub nombre: String,
    pub descripcion: String,
    pub categoria: String,
    pub temporada: String,
    pub visible: bool,
    pub animation: CardAnimation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardAnimation {
    #[default]
    None,
    FadeIn,
    /// The card fades and the renderer hides it once the animation ends.
    FadeOut,
}

impl ProductCard {
    pub fn new(
        producto_id: impl Into<String>,
        nombre: impl Into<String>,
        descripcion: impl Into<String>,
        categoria: impl Into<String>,
        temporada: impl Into<String>,
    ) -> Self {
        Self {
            producto_id: producto_id.into(),
            nombre: nombre.into(),
            descripcion: descripcion.into(),
            categoria: categoria.into(),
            temporada: temporada.into(),
            visible: true,
            animation: CardAnimation::None,
        }
    }

    /// Case-insensitive substring match on any of the searchable fields.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.nombre, &self.descripcion, &self.categoria, &self.temporada]
            .iter()
            .any(|text| text.to_lowercase().contains(needle))
    }
}

#[state("productos/etiquetas")]
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPreview {
    pub labels: Vec<LabelView>,
}

/// Label image panel of one product at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelView {
    pub producto_id: String,
    pub ubicacion_id: String,
    pub visible: bool,
    /// Base64 PNG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
    /// Alt text shown when there is no image.
    pub alt: String,
}

impl LabelView {
    pub fn new(producto_id: impl Into<String>, ubicacion_id: impl Into<String>) -> Self {
        Self {
            producto_id: producto_id.into(),
            ubicacion_id: ubicacion_id.into(),
            visible: false,
            imagen: None,
            alt: String::new(),
        }
    }

    pub fn is(&self, producto_id: &str, ubicacion_id: &str) -> bool {
        self.producto_id == producto_id && self.ubicacion_id == ubicacion_id
    }

    pub fn data_url(&self) -> Option<String> {
        self.imagen
            .as_ref()
            .map(|b64| format!("data:image/png;base64,{}", b64))
    }

    pub fn download_name(&self) -> String {
        format!(
            "etiqueta_producto_{}_{}.png",
            self.producto_id, self.ubicacion_id
        )
    }

    /// Decoded PNG bytes, `None` when no image was loaded.
    pub fn png_bytes(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        self.imagen
            .as_ref()
            .map(|b64| base64::engine::general_purpose::STANDARD.decode(b64))
    }
}

impl LabelPreview {
    pub fn find(&self, producto_id: &str, ubicacion_id: &str) -> Option<&LabelView> {
        self.labels.iter().find(|l| l.is(producto_id, ubicacion_id))
    }

    /// The panel for `(producto, ubicacion)`, created hidden if new.
    pub fn entry(&mut self, producto_id: &str, ubicacion_id: &str) -> &mut LabelView {
        let pos = match self.labels.iter().position(|l| l.is(producto_id, ubicacion_id)) {
            Some(pos) => pos,
            None => {
                self.labels.push(LabelView::new(producto_id, ubicacion_id));
                self.labels.len() - 1
            }
        };
        &mut self.labels[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_matches_any_field_ignoring_case() {
        let card = ProductCard::new("1", "Vela Aromática", "Lavanda", "Velas", "Navidad");
        assert!(card.matches("aromá"));
        assert!(card.matches("lavanda"));
        assert!(card.matches("velas"));
        assert!(card.matches("navi"));
        assert!(card.matches(""));
        assert!(!card.matches("jabón"));
    }

    #[test]
    fn label_download_name_and_bytes() {
        let mut view = LabelView::new("41", "2");
        assert_eq!(view.download_name(), "etiqueta_producto_41_2.png");
        assert!(view.png_bytes().is_none());

        view.imagen = Some("iVBORw0KGgo=".into());
        let bytes = view.png_bytes().unwrap().unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert_eq!(
            view.data_url().unwrap(),
            "data:image/png;base64,iVBORw0KGgo="
        );
    }

    #[test]
    fn entry_creates_once() {
        let mut preview = LabelPreview::default();
        preview.entry("41", "2").visible = true;
        preview.entry("41", "2");
        preview.entry("41", "3");
        assert_eq!(preview.labels.len(), 2);
        assert!(preview.find("41", "2").unwrap().visible);
        assert!(!preview.find("41", "3").unwrap().visible);
    }
}
