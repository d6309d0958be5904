//! Inventory UI text — Spanish (default) and English.
//!
//! Registers every user-facing string with the I18nStore.

use std::collections::HashMap;
use std::sync::Arc;

use tienda_flux::{I18nStore, Params, Translator};

pub const DEFAULT_LOCALE: &str = "es";

/// Register all inventory translations.
pub fn register_all(i18n: &I18nStore) {
    i18n.handle("msg/#", Arc::new(MessageStrings::new()));
    i18n.handle("ui/#", Arc::new(UiStrings::new()));
    i18n.handle("format/#", Arc::new(FormatStrings));
}

/// A fresh store in the default locale with every string registered.
pub fn new_store() -> I18nStore {
    let i18n = I18nStore::new(DEFAULT_LOCALE);
    register_all(&i18n);
    i18n
}

const ES: usize = 0;
const EN: usize = 1;

fn locale_index(locale: &str) -> usize {
    match locale {
        "en" | "en-US" | "en-GB" => EN,
        _ => ES,
    }
}

type Table = HashMap<&'static str, [&'static str; 2]>; // [es, en]

fn lookup(table: &Table, path: &str, locale: &str) -> String {
    table
        .get(path)
        .map(|t| t[locale_index(locale)].to_string())
        .unwrap_or_else(|| path.to_string())
}

// ── Notices ──

struct MessageStrings {
    data: Table,
}

impl MessageStrings {
    fn new() -> Self {
        let mut m = HashMap::new();

        m.insert("msg/lookup/not_found", ["Producto no encontrado por código de barras.", "No product found for this barcode."]);
        m.insert("msg/lookup/failed", ["Ocurrió un error al buscar el producto.", "An error occurred while looking up the product."]);
        m.insert("msg/transfer/done", ["✅ Transferencia realizada correctamente.", "✅ Transfer completed successfully."]);
        m.insert("msg/transfer/failed", ["❌ Error inesperado en la transferencia.", "❌ Unexpected error during the transfer."]);
        m.insert("msg/label/unavailable", ["Etiqueta no disponible", "Label not available"]);
        m.insert("msg/label/failed", ["Error al cargar la etiqueta", "Error loading the label"]);

        Self { data: m }
    }
}

impl Translator for MessageStrings {
    fn translate(&self, path: &str, _params: &Params, locale: &str) -> String {
        lookup(&self.data, path, locale)
    }
}

// ── Labels ──

struct UiStrings {
    data: Table,
}

impl UiStrings {
    fn new() -> Self {
        let mut m = HashMap::new();

        m.insert("ui/submit/register", ["Registrar producto", "Register product"]);
        m.insert("ui/submit/add", ["Agregar inventario", "Add inventory"]);
        m.insert("ui/submit/busy", ["Registrando...", "Registering..."]);
        m.insert("ui/select/all", ["Todas", "All"]);
        m.insert("ui/select/loading", ["Cargando...", "Loading..."]);
        m.insert("ui/select/failed", ["Error al cargar", "Failed to load"]);

        Self { data: m }
    }
}

impl Translator for UiStrings {
    fn translate(&self, path: &str, _params: &Params, locale: &str) -> String {
        lookup(&self.data, path, locale)
    }
}

// ── Format Strings (dynamic content with params) ──

struct FormatStrings;

impl Translator for FormatStrings {
    fn translate(&self, path: &str, params: &Params, _locale: &str) -> String {
        match path {
            "format/transfer/rejected" => {
                format!("❌ Error: {}", params.get("errors").unwrap_or(""))
            }
            "format/transfer/card" => format!(
                "{} (x{})",
                params.get("nombre").unwrap_or(""),
                params.get("cantidad").unwrap_or("")
            ),
            _ => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_by_default() {
        let i18n = new_store();
        assert_eq!(
            i18n.get("msg/lookup/not_found"),
            "Producto no encontrado por código de barras."
        );
        assert_eq!(i18n.get("ui/submit/add"), "Agregar inventario");
    }

    #[test]
    fn switches_to_english() {
        let i18n = new_store();
        i18n.set_locale("en");
        assert_eq!(i18n.get("ui/select/all"), "All");
    }

    #[test]
    fn unknown_path_comes_back() {
        let i18n = new_store();
        assert_eq!(i18n.get("msg/nope"), "msg/nope");
    }

    #[test]
    fn formats_take_params() {
        let i18n = new_store();
        let text = i18n.format(
            "format/transfer/rejected",
            &Params::new(&[("errors", "Sin stock, cantidad=0 & más")]),
        );
        assert_eq!(text, "❌ Error: Sin stock, cantidad=0 & más");
        assert_eq!(
            i18n.get("format/transfer/card?nombre=Vela&cantidad=5"),
            "Vela (x5)"
        );
    }
}
