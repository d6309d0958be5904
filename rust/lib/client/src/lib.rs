//! Tienda HTTP client.
//!
//! Typed access to the JSON endpoints the inventory pages call from the
//! browser: barcode lookup, inventory presence check, category tree,
//! location transfer and barcode label image. Every request is marked as
//! script-originated (`X-Requested-With: XMLHttpRequest`) so the server
//! answers with JSON instead of a full page.
//!
//! # Usage
//!
//! ```ignore
//! use tienda_client::{HttpInventoryApi, InventoryApi, StaticSession};
//!
//! let session = StaticSession::new("sessionid=abc; csrftoken=xyz", Some("xyz".into()));
//! let api = HttpInventoryApi::new("http://localhost:8000", Arc::new(session));
//! let product = api.lookup("7501234567890").await?;
//! ```

mod endpoints;
mod error;
mod session;
pub mod wire;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

pub use endpoints::Endpoints;
pub use error::ApiError;
pub use session::{NoSession, Session, SessionSource, StaticSession};
pub use wire::{
    CategoriesResponse, CategoryRef, LabelResponse, LookupResponse, ParentCategory,
    PresenceResponse, Scalar, TransferForm, TransferResponse, WireAttribute,
};

/// Header marking a request as issued by page script.
pub const REQUESTED_WITH: &str = "X-Requested-With";
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";
/// Header carrying the CSRF token on POST.
pub const CSRF_HEADER: &str = "X-CSRFToken";

// ── InventoryApi ────────────────────────────────────────────────────

/// The server contract as consumed by the UI.
///
/// Handlers depend on this trait, never on HTTP directly; tests swap in
/// an in-memory implementation.
#[async_trait::async_trait]
pub trait InventoryApi: Send + Sync + 'static {
    /// Resolve a barcode to product attributes.
    async fn lookup(&self, codigo: &str) -> Result<LookupResponse, ApiError>;

    /// Whether `producto` already has inventory at `ubicacion`.
    async fn presence(&self, producto: &str, ubicacion: &str)
        -> Result<PresenceResponse, ApiError>;

    /// Parent categories with their subcategories.
    async fn categories(&self) -> Result<CategoriesResponse, ApiError>;

    /// Move stock between two locations.
    async fn transfer(&self, form: &TransferForm) -> Result<TransferResponse, ApiError>;

    /// Barcode label image for a product.
    async fn label(&self, producto: &str) -> Result<LabelResponse, ApiError>;

    /// Routes used to build form actions.
    fn endpoints(&self) -> &Endpoints;
}

// ── HttpInventoryApi ────────────────────────────────────────────────

/// [`InventoryApi`] over HTTP with `reqwest`.
pub struct HttpInventoryApi {
    http: reqwest::Client,
    base_url: String,
    endpoints: Endpoints,
    session: Arc<dyn SessionSource>,
}

impl HttpInventoryApi {
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            endpoints: Endpoints::default(),
            session,
        }
    }

    /// Override the default routes.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    /// Attach the script marker and session headers.
    async fn prepare(
        &self,
        builder: reqwest::RequestBuilder,
        with_csrf: bool,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let mut builder = builder.header(REQUESTED_WITH, XML_HTTP_REQUEST);
        if let Some(session) = self.session.session().await? {
            if !session.cookie.is_empty() {
                builder = builder.header(reqwest::header::COOKIE, session.cookie);
            }
            if with_csrf {
                if let Some(token) = session.csrf_token {
                    builder = builder.header(CSRF_HEADER, token);
                }
            }
        }
        Ok(builder)
    }

    /// Map non-2xx to `ApiError::Server`, then decode the JSON body.
    async fn parse<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: code,
                message: body,
            });
        }
        resp.json::<R>()
            .await
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }

    async fn get_json<R: DeserializeOwned>(
        &self,
        route: &str,
        query: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        let url = self.url(route);
        debug!(%url, ?query, "GET");
        let req = self.http.get(&url).query(query);
        let req = self.prepare(req, false).await?;
        let resp = req.send().await?;
        Self::parse(resp).await
    }
}

#[async_trait::async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn lookup(&self, codigo: &str) -> Result<LookupResponse, ApiError> {
        self.get_json(&self.endpoints.lookup, &[("codigo", codigo)])
            .await
    }

    async fn presence(
        &self,
        producto: &str,
        ubicacion: &str,
    ) -> Result<PresenceResponse, ApiError> {
        self.get_json(
            &self.endpoints.presence,
            &[("producto", producto), ("ubicacion", ubicacion)],
        )
        .await
    }

    async fn categories(&self) -> Result<CategoriesResponse, ApiError> {
        self.get_json(&self.endpoints.categories, &[]).await
    }

    async fn transfer(&self, form: &TransferForm) -> Result<TransferResponse, ApiError> {
        let url = self.url(&self.endpoints.transfer);
        debug!(%url, producto = %form.producto_id, origen = %form.origen_id, destino = %form.destino_id, "POST transfer");

        let mut body = reqwest::multipart::Form::new()
            .text("producto_id", form.producto_id.clone())
            .text("origen_id", form.origen_id.clone())
            .text("destino_id", form.destino_id.clone())
            .text("cantidad", form.cantidad.clone());
        for (name, value) in &form.extra {
            body = body.text(name.clone(), value.clone());
        }

        let req = self.http.post(&url).multipart(body);
        let req = self.prepare(req, true).await?;
        let resp = req.send().await?;
        Self::parse(resp).await
    }

    async fn label(&self, producto: &str) -> Result<LabelResponse, ApiError> {
        let route = self.endpoints.label_for(producto);
        self.get_json(&route, &[]).await
    }

    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::extract::{Multipart, Query};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::Json;
    use serde_json::{json, Value};

    fn is_ajax(headers: &HeaderMap) -> bool {
        headers
            .get("x-requested-with")
            .and_then(|v| v.to_str().ok())
            == Some(XML_HTTP_REQUEST)
    }

    async fn lookup(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        if !is_ajax(&headers) {
            return Json(json!({"existe": false, "nombre": "not ajax"}));
        }
        match q.get("codigo").map(String::as_str) {
            Some("7501234567890") => Json(json!({"existe": false})),
            Some(code) => Json(json!({
                "existe": true,
                "producto_id": 41,
                "nombre": format!("Producto {}", code),
                "precio_menudeo": "25.00",
                "dueño_id": 3,
                "atributos": [{"nombre": "Aroma", "valor": "Coco"}],
            })),
            None => Json(json!({"existe": false})),
        }
    }

    async fn presence(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        let existe = q.get("producto").map(String::as_str) == Some("41")
            && q.get("ubicacion").map(String::as_str) == Some("2");
        Json(json!({"existe": existe}))
    }

    async fn categories() -> Json<Value> {
        Json(json!({"categorias_padre": [
            {"id": 1, "nombre": "Higiene", "subcategorias": [{"id": 11, "nombre": "Jabones"}]}
        ]}))
    }

    async fn transfer(headers: HeaderMap, mut multipart: Multipart) -> (StatusCode, Json<Value>) {
        let csrf = headers
            .get("x-csrftoken")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let cookie = headers
            .get("cookie")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if csrf != "tok" || !cookie.contains("sessionid=s1") {
            return (StatusCode::FORBIDDEN, Json(json!({"detail": "CSRF"})));
        }

        let mut fields = HashMap::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            let value = field.text().await.unwrap();
            fields.insert(name, value);
        }
        if fields.get("cantidad").map(String::as_str) == Some("0") {
            return (
                StatusCode::OK,
                Json(json!({"success": false, "errors": ["La cantidad debe ser mayor que cero."]})),
            );
        }
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "producto_id": fields["producto_id"].parse::<i64>().unwrap(),
                "origen_id": fields["origen_id"],
                "destino_id": fields["destino_id"],
                "producto_nombre": format!("nota:{}", fields.get("nota").cloned().unwrap_or_default()),
                "cantidad": 5,
                "remove_card": true,
                "add_card": true,
            })),
        )
    }

    async fn label() -> Json<Value> {
        Json(json!({"imagen": "aGVsbG8="}))
    }

    async fn broken() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "boom")
    }

    async fn spawn_server() -> String {
        let app = axum::Router::new()
            .route("/inventario/buscar_producto/", get(lookup))
            .route("/inventario/verificar_inventario/", get(presence))
            .route("/inventario/api/categorias/", get(categories))
            .route("/inventario/transferir_inventario/", post(transfer))
            .route("/inventario/producto/:id/codigo_base64/", get(label))
            .route("/broken/", get(broken));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    fn api(base: &str) -> HttpInventoryApi {
        let session = StaticSession::new("sessionid=s1; csrftoken=tok", Some("tok".into()));
        HttpInventoryApi::new(base, Arc::new(session))
    }

    #[tokio::test]
    async fn lookup_found_and_not_found() {
        let base = spawn_server().await;
        let api = api(&base);

        let found = api.lookup("111").await.unwrap();
        assert!(found.existe);
        assert_eq!(found.nombre.as_deref(), Some("Producto 111"));
        assert_eq!(found.dueno_id.unwrap().as_str(), "3");

        let missing = api.lookup("7501234567890").await.unwrap();
        assert!(!missing.existe);
    }

    #[tokio::test]
    async fn presence_sends_both_ids() {
        let base = spawn_server().await;
        let api = api(&base);
        assert!(api.presence("41", "2").await.unwrap().existe);
        assert!(!api.presence("41", "9").await.unwrap().existe);
    }

    #[tokio::test]
    async fn categories_decode() {
        let base = spawn_server().await;
        let tree = api(&base).categories().await.unwrap();
        assert_eq!(tree.categorias_padre[0].nombre, "Higiene");
    }

    #[tokio::test]
    async fn transfer_posts_multipart_with_csrf() {
        let base = spawn_server().await;
        let form = TransferForm {
            producto_id: "41".into(),
            origen_id: "1".into(),
            destino_id: "2".into(),
            cantidad: "3".into(),
            extra: vec![("nota".into(), "urgente".into())],
        };
        let resp = api(&base).transfer(&form).await.unwrap();
        assert!(resp.success);
        assert_eq!(resp.producto_id.unwrap().as_str(), "41");
        assert_eq!(resp.destino_id.unwrap().as_str(), "2");
        assert_eq!(resp.producto_nombre.as_deref(), Some("nota:urgente"));
        assert!(resp.remove_card && resp.add_card);
    }

    #[tokio::test]
    async fn transfer_business_failure_is_not_an_error() {
        let base = spawn_server().await;
        let form = TransferForm {
            producto_id: "41".into(),
            origen_id: "1".into(),
            destino_id: "2".into(),
            cantidad: "0".into(),
            extra: vec![],
        };
        let resp = api(&base).transfer(&form).await.unwrap();
        assert!(!resp.success);
        assert_eq!(resp.errors, vec!["La cantidad debe ser mayor que cero.".to_string()]);
    }

    #[tokio::test]
    async fn transfer_without_session_is_forbidden() {
        let base = spawn_server().await;
        let api = HttpInventoryApi::new(&base, Arc::new(NoSession));
        let err = api.transfer(&TransferForm::default()).await.unwrap_err();
        assert_eq!(err.status(), Some(403));
    }

    #[tokio::test]
    async fn label_uses_product_route() {
        let base = spawn_server().await;
        let resp = api(&base).label("41").await.unwrap();
        assert_eq!(resp.imagen.as_deref(), Some("aGVsbG8="));
    }

    #[tokio::test]
    async fn non_success_status_maps_to_server_error() {
        let base = spawn_server().await;
        let endpoints = Endpoints {
            lookup: "/broken/".into(),
            ..Endpoints::default()
        };
        let api = api(&base).with_endpoints(endpoints);
        match api.lookup("1").await {
            Err(ApiError::Server { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_server_is_network_error() {
        let api = HttpInventoryApi::new("http://127.0.0.1:1", Arc::new(NoSession));
        assert!(matches!(api.categories().await, Err(ApiError::Network(_))));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpInventoryApi::new("http://tienda.local/", Arc::new(NoSession));
        assert_eq!(api.base_url(), "http://tienda.local");
        assert_eq!(
            api.url(&api.endpoints().lookup),
            "http://tienda.local/inventario/buscar_producto/"
        );
    }
}
