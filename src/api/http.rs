//! Transport Wrapper
//!
//! Request/response types, the backend seam and response normalization:
//! non-2xx becomes [`ApiError::RequestFailed`], 204 becomes `None`, anything
//! else is decoded as JSON.

use std::fmt;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiError, ApiResult};

/// Characters `encodeURIComponent` leaves as-is
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const NO_CONTENT: u16 = 204;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request against the service; `path` is relative to the API base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach `body` serialized as JSON
    pub fn json<B: Serialize>(self, body: &B) -> ApiResult<Self> {
        let encoded = serde_json::to_string(body).map_err(ApiError::Encode)?;
        let mut request = self.header("Content-Type", "application/json");
        request.body = Some(encoded);
        Ok(request)
    }
}

/// Status plus the fully read body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP exchange. No retries, no timeout, no cancellation.
#[async_trait(?Send)]
pub trait HttpBackend {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

/// Normalize a finished response
pub fn decode_response<T: DeserializeOwned>(response: HttpResponse) -> ApiResult<Option<T>> {
    if !response.is_success() {
        return Err(ApiError::RequestFailed {
            status: response.status,
            body: response.body,
        });
    }
    if response.status == NO_CONTENT {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&response.body)?))
}

/// Send `request` and normalize the response
pub async fn fetch_json<T: DeserializeOwned>(
    backend: &dyn HttpBackend,
    request: HttpRequest,
) -> ApiResult<Option<T>> {
    tracing::debug!(method = %request.method, path = %request.path, "sending request");
    let response = backend.send(request).await?;
    decode_response(response)
}

/// Like [`fetch_json`] for endpoints whose success must carry a body
pub async fn fetch_required<T: DeserializeOwned>(
    backend: &dyn HttpBackend,
    request: HttpRequest,
) -> ApiResult<T> {
    let method = request.method;
    let path = request.path.clone();
    fetch_json(backend, request)
        .await?
        .ok_or(ApiError::MissingBody { method, path })
}

/// Percent-encode a query parameter value the way `encodeURIComponent` does
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}
