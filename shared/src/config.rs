//! Client configuration.
//!
//! The browser build has no process environment, so the API address is
//! baked in at compile time through `GOBARBER_API_URL`.

use chrono::{FixedOffset, Local, Offset};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash
    pub api_base_url: String,
    /// Offset appointments are displayed and bucketed in
    pub display_offset: FixedOffset,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, display_offset: FixedOffset) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self {
            api_base_url,
            display_offset,
        }
    }

    /// Build-time API address (or the default) with the machine's current offset
    pub fn from_build_env() -> Self {
        let api_base_url = option_env!("GOBARBER_API_URL").unwrap_or(DEFAULT_API_BASE_URL);
        Self::new(api_base_url, Local::now().offset().fix())
    }

    /// Absolute URL for an API path such as `/appointments/me`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
