//! Frontend configuration module
//!
//! The backend origin is baked in at build time from `OAUTHDEMO_API_URL`,
//! the way bundlers inline `VITE_*` variables.

use shared::endpoints::Endpoints;

/// Frontend configuration for the backend location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Backend origin as configured, before normalization.
    pub api_url: Option<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_url: option_env!("OAUTHDEMO_API_URL").map(str::to_string),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend routes, falling back to the page's origin when none is configured.
    pub fn endpoints(&self, page_origin: Option<&str>) -> Endpoints {
        let endpoints = Endpoints::new(self.api_url.as_deref());
        match page_origin {
            Some(origin) => endpoints.or_page_origin(origin),
            None => endpoints,
        }
    }
}
