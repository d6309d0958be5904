//! Report filters — stored at `reportes/filtro`.

use flux_derive::state;
use serde::{Deserialize, Serialize};

use super::producto::SelectOption;

/// Category / subcategory selects of the reports page.
#[state("reportes/filtro")]
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    /// Selected parent category; empty means all.
    pub categoria: String,
    /// Selected subcategory; empty means all.
    pub subcategoria: String,
    /// Subcategory options, always starting with the "all" entry.
    pub options: Vec<SelectOption>,
    pub status: OptionsStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionsStatus {
    #[default]
    Ready,
    Loading,
    Failed,
}

impl ReportFilter {
    pub fn offers(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}
