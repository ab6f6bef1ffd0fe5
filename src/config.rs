use crate::error::{Result, StorefrontError};
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Connection settings for the storefront backend.
///
/// Injected into [`HttpPaymentGateway`](crate::infrastructure::http::HttpPaymentGateway)
/// at construction; nothing in the crate reads the base URL from ambient state.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub base_url: Url,
}

impl GatewayConfig {
    /// Parses and validates a backend base URL.
    ///
    /// Only `http` and `https` URLs that can act as a base are accepted. The
    /// path is kept as a prefix for every endpoint and always ends with `/`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(StorefrontError::Config(format!(
                "unsupported scheme '{}' in API base URL",
                base_url.scheme()
            )));
        }
        if base_url.cannot_be_a_base() {
            return Err(StorefrontError::Config(format!(
                "'{}' cannot be used as an API base URL",
                base_url
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Resolves an API path below the base URL, keeping any base path prefix.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
        }
    }
}
