//! JSON bodies exchanged with the inventory endpoints.
//!
//! The server is lenient about scalar types: ids, prices and quantities
//! show up as numbers in some responses and as strings (decimals) in
//! others. Every such field is a [`Scalar`], which keeps the textual form
//! the UI displays.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Scalar ──────────────────────────────────────────────────────────

/// A number-or-string JSON value, kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawScalar", into = "String")]
pub struct Scalar(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<RawScalar> for Scalar {
    fn from(raw: RawScalar) -> Self {
        match raw {
            RawScalar::Int(n) => Scalar(n.to_string()),
            RawScalar::Float(f) => Scalar(f.to_string()),
            RawScalar::Text(s) => Scalar(s),
        }
    }
}

impl From<Scalar> for String {
    fn from(s: Scalar) -> Self {
        s.0
    }
}

impl Scalar {
    pub fn new(text: impl Into<String>) -> Self {
        Scalar(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text of an optional scalar, empty when absent.
pub fn text_or_empty(value: &Option<Scalar>) -> String {
    value.as_ref().map(|s| s.0.clone()).unwrap_or_default()
}

// ── Lookup ──────────────────────────────────────────────────────────

/// Response of the barcode lookup endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(alias = "exists", default)]
    pub existe: bool,
    #[serde(default)]
    pub producto_id: Option<Scalar>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub precio_mayoreo: Option<Scalar>,
    #[serde(default)]
    pub precio_menudeo: Option<Scalar>,
    #[serde(default)]
    pub precio_docena: Option<Scalar>,
    #[serde(default)]
    pub tipo_codigo: Option<String>,
    #[serde(rename = "dueño_id", alias = "dueno_id", default)]
    pub dueno_id: Option<Scalar>,
    #[serde(default)]
    pub categoria_padre_id: Option<Scalar>,
    #[serde(default)]
    pub subcategoria_id: Option<Scalar>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub atributos: Vec<WireAttribute>,
}

/// One `{nombre, valor}` attribute of a product's subcategory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireAttribute {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub valor: Option<String>,
}

// ── Presence ────────────────────────────────────────────────────────

/// Response of the inventory presence check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PresenceResponse {
    #[serde(alias = "exists", default)]
    pub existe: bool,
}

// ── Categories ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categorias_padre: Vec<ParentCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentCategory {
    pub id: Scalar,
    #[serde(default)]
    pub nombre: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subcategorias: Vec<CategoryRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: Scalar,
    #[serde(default)]
    pub nombre: String,
}

// ── Transfer ────────────────────────────────────────────────────────

/// Fields posted by the transfer confirmation modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferForm {
    pub producto_id: String,
    pub origen_id: String,
    pub destino_id: String,
    pub cantidad: String,
    /// Any other inputs the modal collected, posted as-is.
    pub extra: Vec<(String, String)>,
}

/// Response of the transfer endpoint, success and failure alike.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub producto_id: Option<Scalar>,
    #[serde(default)]
    pub origen_id: Option<Scalar>,
    #[serde(default)]
    pub destino_id: Option<Scalar>,
    #[serde(default)]
    pub remove_card: bool,
    #[serde(default)]
    pub add_card: bool,
    #[serde(default)]
    pub producto_nombre: Option<String>,
    #[serde(default)]
    pub cantidad: Option<Scalar>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<String>,
}

// ── Label ───────────────────────────────────────────────────────────

/// Barcode label image, base64 PNG, or `null` when the product has none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelResponse {
    #[serde(default)]
    pub imagen: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
