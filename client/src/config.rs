//! API endpoint configuration for the browser client.
//!
//! The base URL is baked in at compile time from `REGISTRY_API_BASE` so the
//! WASM bundle needs no runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::with_base(option_env!("REGISTRY_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn with_base(base: &str) -> Self {
        Self {
            api_base_url: base.trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Join an absolute API path (`/user/...`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
