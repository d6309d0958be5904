use serde::{Deserialize, Serialize};

/// Server routes consumed by the UI, relative to the base URL.
///
/// Defaults match the deployed application. `{producto}` and
/// `{ubicacion}` placeholders are filled per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub lookup: String,
    pub presence: String,
    pub categories: String,
    pub transfer: String,
    pub label: String,
    /// Form action when the product is new at the selected location.
    pub register_product: String,
    /// Form action when the product already has stock there.
    pub add_inventory: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            lookup: "/inventario/buscar_producto/".into(),
            presence: "/inventario/verificar_inventario/".into(),
            categories: "/inventario/api/categorias/".into(),
            transfer: "/inventario/transferir_inventario/".into(),
            label: "/inventario/producto/{producto}/codigo_base64/".into(),
            register_product: "/inventario/nuevo_producto/".into(),
            add_inventory: "/inventario/agregar_inventario/{producto}/{ubicacion}/".into(),
        }
    }
}

impl Endpoints {
    pub fn label_for(&self, producto: &str) -> String {
        self.label.replace("{producto}", producto)
    }

    pub fn add_inventory_for(&self, producto: &str, ubicacion: &str) -> String {
        self.add_inventory
            .replace("{producto}", producto)
            .replace("{ubicacion}", ubicacion)
    }
}
