//! Session credentials attached to every request.
//!
//! The inventory pages sit behind a login and POSTs are CSRF-protected.
//! A browser sends the session cookie and CSRF token on its own; any
//! other platform supplies them through a [`SessionSource`].

use crate::ApiError;

/// Cookie header value plus the CSRF token echoed on unsafe methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Raw `Cookie` header, e.g. `sessionid=...; csrftoken=...`.
    pub cookie: String,
    pub csrf_token: Option<String>,
}

/// Pluggable session provider, consulted before every request.
/// `Ok(None)` sends the request anonymously.
#[async_trait::async_trait]
pub trait SessionSource: Send + Sync + 'static {
    async fn session(&self) -> Result<Option<Session>, ApiError>;
}

/// Anonymous requests.
pub struct NoSession;

#[async_trait::async_trait]
impl SessionSource for NoSession {
    async fn session(&self) -> Result<Option<Session>, ApiError> {
        Ok(None)
    }
}

/// Fixed session obtained elsewhere (config file, browser dev tools).
pub struct StaticSession(Session);

impl StaticSession {
    pub fn new(cookie: impl Into<String>, csrf_token: Option<String>) -> Self {
        Self(Session {
            cookie: cookie.into(),
            csrf_token,
        })
    }
}

#[async_trait::async_trait]
impl SessionSource for StaticSession {
    async fn session(&self) -> Result<Option<Session>, ApiError> {
        if self.0.cookie.is_empty() && self.0.csrf_token.is_none() {
            return Ok(None);
        }
        Ok(Some(self.0.clone()))
    }
}
