//! In-memory `InventoryApi` for handler tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tienda_client::{
    ApiError, CategoriesResponse, Endpoints, InventoryApi, LabelResponse, LookupResponse,
    PresenceResponse, TransferForm, TransferResponse,
};
use tokio::sync::Notify;

/// `Err(status)` answers with `ApiError::Server`.
type Reply<T> = Result<T, u16>;

#[derive(Default)]
pub(crate) struct FakeApi {
    endpoints: Endpoints,
    lookups: Mutex<HashMap<String, Reply<LookupResponse>>>,
    presence: Mutex<HashMap<(String, String), Reply<PresenceResponse>>>,
    categories: Mutex<Option<Reply<CategoriesResponse>>>,
    transfer: Mutex<Option<Reply<TransferResponse>>>,
    labels: Mutex<HashMap<String, Reply<LabelResponse>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    pub lookup_calls: Mutex<Vec<String>>,
    pub presence_calls: AtomicUsize,
    pub category_calls: AtomicUsize,
    pub transfers: Mutex<Vec<TransferForm>>,
}

fn server_error(status: u16) -> ApiError {
    ApiError::Server {
        status,
        message: "fake".into(),
    }
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn lookup_reply(&self, codigo: &str, reply: Reply<LookupResponse>) {
        self.lookups.lock().unwrap().insert(codigo.into(), reply);
    }

    pub fn presence_reply(&self, producto: &str, ubicacion: &str, reply: Reply<bool>) {
        let reply = reply.map(|existe| PresenceResponse { existe });
        self.presence
            .lock()
            .unwrap()
            .insert((producto.into(), ubicacion.into()), reply);
    }

    pub fn categories_reply(&self, reply: Reply<CategoriesResponse>) {
        *self.categories.lock().unwrap() = Some(reply);
    }

    pub fn transfer_reply(&self, reply: Reply<TransferResponse>) {
        *self.transfer.lock().unwrap() = Some(reply);
    }

    pub fn label_reply(&self, producto: &str, reply: Reply<LabelResponse>) {
        self.labels.lock().unwrap().insert(producto.into(), reply);
    }

    /// Hold the next response for `key` until the returned gate is notified.
    /// Keys: the barcode for lookups, `presence:{p}:{u}`, `categories`,
    /// `transfer`.
    pub fn gate(&self, key: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().unwrap().insert(key.into(), gate.clone());
        gate
    }

    async fn wait(&self, key: &str) {
        let gate = self.gates.lock().unwrap().remove(key);
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

#[async_trait::async_trait]
impl InventoryApi for FakeApi {
    async fn lookup(&self, codigo: &str) -> Result<LookupResponse, ApiError> {
        self.lookup_calls.lock().unwrap().push(codigo.into());
        self.wait(codigo).await;
        let reply = self.lookups.lock().unwrap().get(codigo).cloned();
        match reply {
            Some(reply) => reply.map_err(server_error),
            None => Ok(LookupResponse::default()),
        }
    }

    async fn presence(
        &self,
        producto: &str,
        ubicacion: &str,
    ) -> Result<PresenceResponse, ApiError> {
        self.presence_calls.fetch_add(1, Ordering::SeqCst);
        self.wait(&format!("presence:{}:{}", producto, ubicacion)).await;
        let key = (producto.to_string(), ubicacion.to_string());
        let reply = self.presence.lock().unwrap().get(&key).cloned();
        reply.unwrap_or(Err(500)).map_err(server_error)
    }

    async fn categories(&self) -> Result<CategoriesResponse, ApiError> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        self.wait("categories").await;
        let reply = self.categories.lock().unwrap().clone();
        reply.unwrap_or(Err(500)).map_err(server_error)
    }

    async fn transfer(&self, form: &TransferForm) -> Result<TransferResponse, ApiError> {
        self.transfers.lock().unwrap().push(form.clone());
        self.wait("transfer").await;
        let reply = self.transfer.lock().unwrap().clone();
        reply.unwrap_or(Err(500)).map_err(server_error)
    }

    async fn label(&self, producto: &str) -> Result<LabelResponse, ApiError> {
        let reply = self.labels.lock().unwrap().get(producto).cloned();
        reply
            .unwrap_or(Ok(LabelResponse::default()))
            .map_err(server_error)
    }

    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}
