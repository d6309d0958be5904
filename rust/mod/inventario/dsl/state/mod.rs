//! View state definitions.
//!
//! Each file defines the state types stored at well-known paths.
//! `#[state("path")]` generates the `PATH` const.

pub mod catalogo;
pub mod producto;
pub mod productos;
pub mod reportes;
pub mod transferencia;
pub mod ui;

pub use catalogo::{SubcategoryCatalog, SubcategoryEntry};
pub use producto::{
    AttributeRow, ButtonTone, FieldName, FocusTarget, FormField, FormSubmission, LookupOutcome,
    LookupStatus, ProductForm, SelectOption, SubmissionOutcome, SubmitMode,
};
pub use productos::{CardAnimation, LabelPreview, LabelView, ProductCard, ProductFilter};
pub use reportes::{OptionsStatus, ReportFilter};
pub use transferencia::{
    DragPhase, Dropzone, IntentError, TransferBoard, TransferCard, TransferIntent, TransferModal,
    TransferOutcome, TransferStatus,
};
pub use ui::{LayoutState, Notice, NoticeKind, Notices, SubmitButton};
