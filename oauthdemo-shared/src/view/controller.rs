use tracing::info;

use super::{ViewError, ViewModel, ViewState};
use crate::client::Backend;
use crate::endpoints::Endpoints;
use crate::models::GreetingKind;

/// Performs the full-page navigation behind login and logout.
///
/// The browser front-end assigns `window.location.href`; the CLI prints the URL
/// for the user to open.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&self, url: &str);
}

/// Drives a [`ViewModel`] against a [`Backend`], one awaited action at a time.
#[derive(Debug)]
pub struct ViewController<B, N> {
    model: ViewModel,
    backend: B,
    navigator: N,
    endpoints: Endpoints,
}

impl<B: Backend, N: Navigator> ViewController<B, N> {
    /// Creates a controller in [`ViewState::Resolving`].
    ///
    /// `endpoints` decides where login and logout navigate to; the backend
    /// carries its own copy for API calls.
    pub fn new(backend: B, navigator: N, endpoints: Endpoints) -> Self {
        Self {
            model: ViewModel::new(),
            backend,
            navigator,
            endpoints,
        }
    }

    #[must_use]
    pub fn model(&self) -> &ViewModel {
        &self.model
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.model.view_state()
    }

    /// Runs the startup session check.
    ///
    /// Only the first call reaches the backend; later calls return the settled
    /// state untouched.
    pub async fn start(&mut self) -> ViewState {
        if self.model.view_state() == ViewState::Resolving {
            let outcome = self.backend.fetch_session().await;
            self.model.apply_session(outcome);
        }
        self.model.view_state()
    }

    /// Navigates to the Google authorization endpoint.
    ///
    /// # Errors
    /// Returns [`ViewError`] unless the view is anonymous.
    pub fn login(&self) -> Result<(), ViewError> {
        let url = self.model.login_target(&self.endpoints)?;
        info!(%url, "redirecting to sign-in");
        self.navigator.navigate(&url);
        Ok(())
    }

    /// Navigates to the backend logout endpoint.
    ///
    /// # Errors
    /// Returns [`ViewError`] unless the view is authenticated.
    pub fn logout(&self) -> Result<(), ViewError> {
        let url = self.model.logout_target(&self.endpoints)?;
        info!(%url, "redirecting to sign-out");
        self.navigator.navigate(&url);
        Ok(())
    }

    /// Sends `GET /api/hello` and records the outcome.
    ///
    /// # Errors
    /// Returns [`ViewError`] unless the view is authenticated. Backend failures
    /// are recorded in the model, not returned.
    pub async fn send_get_greeting(&mut self) -> Result<(), ViewError> {
        let ticket = self.model.begin_greeting(GreetingKind::Get)?;
        let outcome = self.backend.fetch_greeting().await;
        self.model.finish_greeting(ticket, outcome);
        Ok(())
    }

    /// Sends `POST /api/hello` with the current draft and records the outcome.
    ///
    /// # Errors
    /// Returns [`ViewError`] unless the view is authenticated. Backend failures
    /// are recorded in the model, not returned.
    pub async fn send_post_greeting(&mut self) -> Result<(), ViewError> {
        let ticket = self.model.begin_greeting(GreetingKind::Post)?;
        let message = self.model.draft().to_owned();
        let outcome = self.backend.submit_greeting(&message).await;
        self.model.finish_greeting(ticket, outcome);
        Ok(())
    }

    /// # Errors
    /// Returns [`ViewError`] unless the view is authenticated.
    pub fn set_draft(&mut self, text: impl Into<String>) -> Result<(), ViewError> {
        self.model.set_draft(text)
    }

    /// Forgets everything, as a page reload would. Call [`Self::start`] again afterwards.
    pub fn reset(&mut self) {
        self.model.reset();
    }
}
