//! Client configuration shared by the web and CLI front ends.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Base URL used when nothing else is configured (the service's dev default).
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// How long a toast stays on screen.
pub const DEFAULT_TOAST_TTL_MS: u64 = 5_000;

/// Settings needed to reach the notes service and pace the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    #[serde(default = "default_toast_ttl_ms")]
    pub toast_ttl_ms: u64,
}

const fn default_toast_ttl_ms() -> u64 {
    DEFAULT_TOAST_TTL_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
        }
    }
}

impl ClientConfig {
    /// Config for an explicit base URL, normalized.
    pub fn new(api_base_url: &str) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url)?,
            ..Self::default()
        })
    }

    /// Resolve from the first non-blank candidate, in priority order.
    ///
    /// Falls back to [`DEFAULT_API_BASE_URL`] when every candidate is blank.
    pub fn resolve<I>(candidates: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let base_url = candidates
            .into_iter()
            .find_map(normalize_text_option)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self::new(&base_url)
    }

    #[must_use]
    pub fn with_toast_ttl_ms(mut self, toast_ttl_ms: Option<u64>) -> Self {
        if let Some(ttl) = toast_ttl_ms.filter(|ttl| *ttl > 0) {
            self.toast_ttl_ms = ttl;
        }
        self
    }

    pub const fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }
}

/// Trim, strip trailing slashes, and require an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::InvalidInput(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(&base) {
        return Err(Error::InvalidInput(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}
