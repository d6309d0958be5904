/// Client-side API error.
///
/// Every variant is a *transport* failure from the UI's point of view:
/// business outcomes such as "product not found" or "transfer rejected"
/// arrive as successful responses and are never errors here.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("session: {0}")]
    Session(String),

    #[error("decode: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status for server errors, `None` for anything else.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
