//! Category catalog — stored at `catalogo/subcategorias`.

use flux_derive::state;
use serde::{Deserialize, Serialize};

/// Every subcategory with its parent, in the order the server lists them.
#[state("catalogo/subcategorias")]
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryCatalog {
    pub entries: Vec<SubcategoryEntry>,
    /// Set once the catalog was seeded or fetched.
    pub loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategoryEntry {
    pub id: String,
    pub nombre: String,
    /// Parent category id.
    pub padre: String,
}

impl SubcategoryEntry {
    pub fn new(id: impl Into<String>, nombre: impl Into<String>, padre: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nombre: nombre.into(),
            padre: padre.into(),
        }
    }
}

impl SubcategoryCatalog {
    pub fn with_entries(entries: Vec<SubcategoryEntry>) -> Self {
        Self {
            entries,
            loaded: true,
        }
    }

    /// Children of `padre`, in source order.
    pub fn children_of<'a>(&'a self, padre: &'a str) -> impl Iterator<Item = &'a SubcategoryEntry> {
        self.entries.iter().filter(move |e| e.padre == padre)
    }
}
