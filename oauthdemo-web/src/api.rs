use serde_json::Value;
use shared::client::{Backend, BackendResult, HttpBackend};
use shared::endpoints::Endpoints;
use shared::models::UserResponse;
use std::rc::Rc;

use crate::browser;
use crate::config::FrontendConfig;

/// Lightweight API handle for the OAuth demo backend.
///
/// Built once by the root component and cloned into callbacks; there is no
/// process-wide client.
#[derive(Clone, Debug)]
pub struct DemoClient {
    endpoints: Endpoints,
    backend: Rc<BackendResult<HttpBackend>>,
}

impl DemoClient {
    /// Create a client for the configured backend, resolved against the current page.
    pub fn from_config(config: &FrontendConfig) -> Self {
        let endpoints = config.endpoints(browser::page_origin().as_deref());
        let backend = HttpBackend::new(endpoints.clone());
        if let Err(err) = &backend {
            browser::log_error(&format!("failed to build HTTP client: {err}"));
        }
        Self {
            endpoints,
            backend: Rc::new(backend),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn backend(&self) -> BackendResult<&HttpBackend> {
        (*self.backend).as_ref().map_err(Clone::clone)
    }

    /// Retrieve the current session.
    pub async fn fetch_session(&self) -> BackendResult<UserResponse> {
        self.backend()?.fetch_session().await
    }

    /// Call `GET /api/hello`.
    pub async fn fetch_greeting(&self) -> BackendResult<Value> {
        self.backend()?.fetch_greeting().await
    }

    /// Call `POST /api/hello`.
    pub async fn submit_greeting(&self, message: &str) -> BackendResult<Value> {
        self.backend()?.submit_greeting(message).await
    }
}
