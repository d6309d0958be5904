pub mod config;
pub mod inventario;

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tienda_client::{HttpInventoryApi, NoSession, SessionSource, StaticSession};
use tienda_flux::Flux;
use tienda_inventario::state::Notices;
use tienda_inventario::{i18n_strings, register_handlers, InventarioContext};

use crate::config::ClientConfig;

/// A headless page: handlers wired to the configured server.
pub struct Page {
    pub flux: Flux,
}

impl Page {
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        if config.server.is_empty() {
            anyhow::bail!("No server URL set. Run `tienda config set --server <url>` or pass --server.");
        }

        let session: Arc<dyn SessionSource> = if config.cookie.is_empty() {
            Arc::new(NoSession)
        } else {
            let csrf = Some(config.csrf_token.clone()).filter(|t| !t.is_empty());
            Arc::new(StaticSession::new(config.cookie.clone(), csrf))
        };
        let api = HttpInventoryApi::new(config.server.clone(), session)
            .with_endpoints(config.endpoints.clone());

        let i18n = i18n_strings::new_store();
        i18n.set_locale(config.locale());

        let flux = Flux::new();
        register_handlers(&flux, InventarioContext::new(Arc::new(api), Arc::new(i18n)));
        Ok(Self { flux })
    }

    /// Typed state at `path`, or an error naming it.
    pub fn state<T: std::any::Any + Clone>(&self, path: &str) -> Result<T> {
        self.flux
            .get_as::<T>(path)
            .ok_or_else(|| anyhow::anyhow!("no state at {}", path))
    }

    /// Print queued notices, oldest first.
    pub fn print_notices(&self) {
        let Some(notices) = self.flux.get_as::<Notices>(Notices::PATH) else {
            return;
        };
        for notice in &notices.items {
            println!("[{:?}] {}", notice.kind, notice.text);
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
