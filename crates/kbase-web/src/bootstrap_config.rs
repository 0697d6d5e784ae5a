//! Web bootstrap configuration loaded from build-time generated JSON.

use kbase_core::config::ClientConfig;
use kbase_core::util::normalize_text_option;
use serde::{Deserialize, Serialize};

/// Values baked into the bundle at build time.
///
/// Everything here ships to the browser, so only public endpoints belong in it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebBootstrapConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub toast_ttl_ms: Option<u64>,
}

/// Loads the generated bootstrap JSON from `OUT_DIR`.
///
/// A parse failure logs a warning and yields the empty config, so the page
/// falls back to its own origin.
pub fn load_bootstrap_config() -> WebBootstrapConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/web-bootstrap.json"));
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse web bootstrap config: {}", error);
        WebBootstrapConfig::default()
    })
}

impl WebBootstrapConfig {
    /// Client config for this page.
    ///
    /// The build-time URL wins; otherwise the API is assumed to share the
    /// page's origin. An unusable URL falls back to the defaults.
    pub fn client_config(&self, page_origin: Option<String>) -> ClientConfig {
        let config = ClientConfig::resolve([
            normalize_text_option(self.api_base_url.clone()),
            page_origin,
        ])
        .unwrap_or_else(|error| {
            tracing::warn!("Invalid API base URL, using default: {}", error);
            ClientConfig::default()
        });
        config.with_toast_ttl_ms(self.toast_ttl_ms)
    }
}
