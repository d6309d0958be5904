//! Report filter requests.

use flux_derive::request;

/// Reports page loaded with the filters of the current query.
#[request("reportes/open")]
pub struct OpenReportFilterReq {
    pub categoria: String,
    pub subcategoria: String,
}

#[request("reportes/categoria")]
pub struct SelectReportCategoryReq {
    pub categoria: String,
}

#[request("reportes/subcategoria")]
pub struct SelectReportSubcategoryReq {
    pub subcategoria: String,
}
