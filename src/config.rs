//! Client Configuration
//!
//! Read from `<meta>` tags on the host page:
//!
//! ```html
//! <meta name="api-base-url" content="http://localhost:8000">
//! <meta name="log-level" content="debug">
//! ```
//!
//! Missing tags mean same-origin requests and `info` logging.

use tracing::Level;

pub const API_BASE_URL_META: &str = "api-base-url";
pub const LOG_LEVEL_META: &str = "log-level";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every resource path; empty for same-origin
    pub api_base_url: String,
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            log_level: Level::INFO,
        }
    }
}

impl ClientConfig {
    /// Build from raw meta values
    pub fn from_values(api_base_url: Option<String>, log_level: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim().to_string())
                .unwrap_or(defaults.api_base_url),
            log_level: log_level
                .and_then(|level| parse_level(&level))
                .unwrap_or(defaults.log_level),
        }
    }

    /// Read the page's meta tags
    pub fn from_document() -> Self {
        Self::from_values(meta_content(API_BASE_URL_META), meta_content(LOG_LEVEL_META))
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!(r#"meta[name="{}"]"#, name);
    document.query_selector(&selector).ok()??.get_attribute("content")
}

fn parse_level(raw: &str) -> Option<Level> {
    raw.trim().parse().ok()
}

/// Join a base URL and an absolute resource path without doubling slashes
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
