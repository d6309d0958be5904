//! Product registration form — stored at `producto/form`.
//! Lookup progress — stored at `producto/busqueda`.
//! Submission outcome — stored at `producto/envio`.

use flux_derive::state;
use serde::{Deserialize, Serialize};

/// The registration form, including the fields a barcode lookup fills.
#[state("producto/form")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    /// Barcode input.
    pub codigo: String,
    pub nombre: FormField,
    pub descripcion: FormField,
    pub precio_mayoreo: FormField,
    pub precio_menudeo: FormField,
    pub precio_docena: FormField,
    pub tipo_codigo: FormField,
    pub dueno: FormField,
    pub categoria_padre: FormField,
    pub subcategoria: FormField,
    /// Options of the subcategory select.
    pub subcategorias: Vec<SelectOption>,
    /// Read-only attribute rows of the looked-up product.
    pub atributos: Vec<AttributeRow>,
    /// Hidden `producto_id` input, set once a lookup found the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producto_id: Option<String>,
    /// Selected location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<String>,
    pub mode: SubmitMode,
    /// Form action URL for the current mode.
    pub action: String,
    pub submit_label: String,
    pub submit_tone: ButtonTone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<FocusTarget>,
}

/// One editable input of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub value: String,
    /// Read-only (inputs) or disabled (selects).
    pub locked: bool,
}

impl FormField {
    pub fn locked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            locked: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRow {
    pub nombre: String,
    pub valor: String,
}

/// Which server action the form posts to. Exactly one is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SubmitMode {
    #[default]
    RegisterNew,
    AddToExisting { producto: String, ubicacion: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonTone {
    #[default]
    Red,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusTarget {
    CantidadInicial,
}

/// Names of the fields a user (or a lookup) can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Nombre,
    Descripcion,
    PrecioMayoreo,
    PrecioMenudeo,
    PrecioDocena,
    TipoCodigo,
    Dueno,
    CategoriaPadre,
    Subcategoria,
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        FieldName::Nombre,
        FieldName::Descripcion,
        FieldName::PrecioMayoreo,
        FieldName::PrecioMenudeo,
        FieldName::PrecioDocena,
        FieldName::TipoCodigo,
        FieldName::Dueno,
        FieldName::CategoriaPadre,
        FieldName::Subcategoria,
    ];
}

impl ProductForm {
    /// An empty, fully editable form in register-new mode.
    pub fn empty(ubicacion: Option<String>) -> Self {
        Self {
            codigo: String::new(),
            nombre: FormField::default(),
            descripcion: FormField::default(),
            precio_mayoreo: FormField::default(),
            precio_menudeo: FormField::default(),
            precio_docena: FormField::default(),
            tipo_codigo: FormField::default(),
            dueno: FormField::default(),
            categoria_padre: FormField::default(),
            subcategoria: FormField::default(),
            subcategorias: Vec::new(),
            atributos: Vec::new(),
            producto_id: None,
            ubicacion,
            mode: SubmitMode::RegisterNew,
            action: String::new(),
            submit_label: String::new(),
            submit_tone: ButtonTone::Red,
            focus: None,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Nombre => &self.nombre,
            FieldName::Descripcion => &self.descripcion,
            FieldName::PrecioMayoreo => &self.precio_mayoreo,
            FieldName::PrecioMenudeo => &self.precio_menudeo,
            FieldName::PrecioDocena => &self.precio_docena,
            FieldName::TipoCodigo => &self.tipo_codigo,
            FieldName::Dueno => &self.dueno,
            FieldName::CategoriaPadre => &self.categoria_padre,
            FieldName::Subcategoria => &self.subcategoria,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Nombre => &mut self.nombre,
            FieldName::Descripcion => &mut self.descripcion,
            FieldName::PrecioMayoreo => &mut self.precio_mayoreo,
            FieldName::PrecioMenudeo => &mut self.precio_menudeo,
            FieldName::PrecioDocena => &mut self.precio_docena,
            FieldName::TipoCodigo => &mut self.tipo_codigo,
            FieldName::Dueno => &mut self.dueno,
            FieldName::CategoriaPadre => &mut self.categoria_padre,
            FieldName::Subcategoria => &mut self.subcategoria,
        }
    }

    /// True when no mapped field is locked.
    pub fn is_editable(&self) -> bool {
        FieldName::ALL.iter().all(|f| !self.field(*f).locked)
    }
}

/// Progress of barcode lookups for the form.
#[state("producto/busqueda")]
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupStatus {
    /// The code input is dimmed while a lookup is in flight.
    pub searching: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<LookupOutcome>,
}

/// Result of the most recent lookup that was not discarded as stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LookupOutcome {
    Found { codigo: String, producto_id: Option<String> },
    NotFound { codigo: String },
    Failed { codigo: String, message: String },
}

/// What happened to the last form submission.
#[state("producto/envio")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub outcome: SubmissionOutcome,
    /// Action the form was (or would have been) posted to.
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionOutcome {
    /// The form already had a name; the platform posts it as is.
    Native,
    /// Submission was held for a lookup that filled the name; the platform
    /// posts it now.
    Resubmitted,
    /// Submission was held and the lookup did not fill the name.
    Dropped,
}

impl SubmissionOutcome {
    pub fn proceeds(self) -> bool {
        !matches!(self, SubmissionOutcome::Dropped)
    }
}
