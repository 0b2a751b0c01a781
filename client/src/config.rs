//! Backend endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console talks to a single REST backend. Its origin is fixed when the
//! WASM bundle is built (`ISENIOR_API_URL`) so every request goes through
//! [`ApiConfig::endpoint`] instead of inlining the host in each page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend origin used when `ISENIOR_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Resolved REST backend location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build the config from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("ISENIOR_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(raw: &str) -> Self {
        Self { base_url: normalize_base_url(raw) }
    }

    /// Join the base URL with an absolute API path such as `/residents`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
