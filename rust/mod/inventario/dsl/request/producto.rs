//! Product registration form requests.

use flux_derive::request;

use crate::state::FieldName;

/// Page loaded with an empty registration form.
#[request("producto/open")]
pub struct OpenProductFormReq {
    /// Location preselected by the page, if any.
    pub ubicacion: Option<String>,
}

/// Look a barcode up and autofill the form.
#[request("producto/lookup")]
pub struct LookupReq {
    /// Current value of the code input.
    pub codigo: String,
    pub trigger: LookupTrigger,
}

/// Which input event fired the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTrigger {
    /// Enter in the code input; the native submission is suppressed.
    Enter,
    Change,
    /// Focus left the code input; only looks up while `nombre` is empty.
    Blur,
}

/// User typed into one of the form fields.
#[request("producto/field")]
pub struct EditFieldReq {
    pub field: FieldName,
    pub value: String,
}

/// Location select changed.
#[request("producto/ubicacion")]
pub struct SelectLocationReq {
    pub ubicacion: Option<String>,
}

/// The form is being submitted.
#[request("producto/submit")]
pub struct SubmitProductReq;

/// Clear the form back to an empty register-new form.
#[request("producto/reset")]
pub struct ResetProductFormReq;
