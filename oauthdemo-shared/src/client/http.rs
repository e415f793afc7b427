use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

#[cfg(not(target_arch = "wasm32"))]
use {reqwest::cookie::Jar, std::sync::Arc};

use super::{Backend, BackendResult};
use crate::endpoints::Endpoints;
use crate::models::{GreetingRequest, UserResponse};

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("oauthdemo/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed [`Backend`].
///
/// In the browser every request is sent with `credentials: include`, so the
/// backend's session cookie travels cross-origin. Native builds keep cookies in
/// a [`Jar`] owned by the caller.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    endpoints: Endpoints,
    client: Client,
}

impl HttpBackend {
    /// Creates a client for the given endpoints with an empty cookie store.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(endpoints: Endpoints) -> BackendResult<Self> {
        Self::with_cookie_jar(endpoints, Arc::new(Jar::default()))
    }

    /// Creates a client that reads and writes session cookies through `jar`.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_cookie_jar(endpoints: Endpoints, jar: Arc<Jar>) -> BackendResult<Self> {
        let client = Client::builder()
            .cookie_provider(jar)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { endpoints, client })
    }

    /// Creates a client for the given endpoints using the browser's cookie store.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    #[cfg(target_arch = "wasm32")]
    pub fn new(endpoints: Endpoints) -> BackendResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { endpoints, client })
    }

    fn get(&self, url: &str) -> RequestBuilder {
        with_credentials(self.client.get(url))
    }

    fn post(&self, url: &str) -> RequestBuilder {
        with_credentials(self.client.post(url))
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

async fn read_json<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
    let response = response.error_for_status()?;
    Ok(response.json::<T>().await?)
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn fetch_session(&self) -> BackendResult<UserResponse> {
        let url = self.endpoints.user();
        debug!(%url, "checking session");
        let outcome = match self.get(&url).send().await {
            Ok(response) => read_json(response).await,
            Err(err) => Err(err.into()),
        };
        outcome.inspect_err(|err| warn!(%url, error = %err, "session check failed"))
    }

    async fn fetch_greeting(&self) -> BackendResult<Value> {
        let url = self.endpoints.hello();
        debug!(%url, "fetching greeting");
        let outcome = match self.get(&url).send().await {
            Ok(response) => read_json(response).await,
            Err(err) => Err(err.into()),
        };
        outcome.inspect_err(|err| warn!(%url, error = %err, "greeting fetch failed"))
    }

    async fn submit_greeting(&self, message: &str) -> BackendResult<Value> {
        let url = self.endpoints.hello();
        debug!(%url, len = message.len(), "submitting greeting");
        let body = GreetingRequest::new(message);
        let outcome = match self.post(&url).json(&body).send().await {
            Ok(response) => read_json(response).await,
            Err(err) => Err(err.into()),
        };
        outcome.inspect_err(|err| warn!(%url, error = %err, "greeting submit failed"))
    }
}
