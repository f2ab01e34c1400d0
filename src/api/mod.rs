//! Remote Service Client
//!
//! HTTP bindings to the notes/action-items service, organized by resource.

mod http;
mod fetch;
mod notes;
mod action_items;

use std::rc::Rc;

pub use http::*;
pub use fetch::BrowserFetch;
pub use notes::*;
pub use action_items::*;

/// Everything a request can fail with
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `body` is the server's diagnostic text
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("{method} {path} returned no content")]
    MissingBody { method: Method, path: String },
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Human-readable detail: the response body for failed requests
    pub fn diagnostic(&self) -> String {
        match self {
            ApiError::RequestFailed { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Cheap-to-clone handle on the transport every endpoint goes through
#[derive(Clone)]
pub struct ApiClient {
    backend: Rc<dyn HttpBackend>,
}

impl ApiClient {
    pub fn new(backend: Rc<dyn HttpBackend>) -> Self {
        Self { backend }
    }

    pub(crate) fn backend(&self) -> &dyn HttpBackend {
        self.backend.as_ref()
    }
}
