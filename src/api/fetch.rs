//! Browser Transport
//!
//! [`HttpBackend`] on top of `window.fetch`.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{ApiError, ApiResult, HttpBackend, HttpRequest, HttpResponse};
use crate::config::ClientConfig;

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Sends requests through the page's `fetch`, resolving paths against the
/// configured base URL
pub struct BrowserFetch {
    base_url: String,
}

impl BrowserFetch {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }

    fn url(&self, path: &str) -> String {
        crate::config::join_url(&self.base_url, path)
    }
}

#[async_trait(?Send)]
impl HttpBackend for BrowserFetch {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&self.url(&request.path), &init).map_err(js_error)?;
        for (name, value) in &request.headers {
            js_request.headers().set(name, value).map_err(js_error)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window available".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&js_request)).await.map_err(js_error)?;
        let response: Response = value.dyn_into().map_err(js_error)?;

        // Read the whole body before anything decides success or failure
        let status = response.status();
        let text = JsFuture::from(response.text().map_err(js_error)?).await.map_err(js_error)?;

        Ok(HttpResponse::new(status, text.as_string().unwrap_or_default()))
    }
}
