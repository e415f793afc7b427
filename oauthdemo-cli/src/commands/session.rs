use std::{fmt::Write as _, path::PathBuf, sync::Arc};

use anyhow::{Context, Result, anyhow, bail};
use clap::Subcommand;
use reqwest::cookie::Jar;
use shared::{
    client::HttpBackend,
    config::client::{API_URL_ENV, Config},
    display::{pretty_json, session_summary},
    models::GreetingKind,
    view::{Navigator, ViewController, ViewModel, ViewState},
};
use url::Url;

use super::jar;

#[derive(Subcommand, Debug)]
pub enum HelloCommand {
    /// Call `GET /api/hello`
    Get,
    /// Call `POST /api/hello` with a message
    Post {
        #[arg(long, short, help = "Message to send in the request body")]
        message: String,
    },
}

/// Prints the navigation target; a terminal cannot follow a redirect itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, url: &str) {
        println!("Open this URL in your browser:\n  {url}");
    }
}

pub type Controller = ViewController<HttpBackend, TerminalNavigator>;

/// A controller wired to the on-disk cookie jar.
pub struct Workspace {
    pub controller: Controller,
    jar: Arc<Jar>,
    origin: Url,
    jar_path: PathBuf,
}

impl Workspace {
    /// Builds the client for the configured origin and loads stored cookies.
    ///
    /// # Errors
    /// Fails when no origin is configured or the jar cannot be read.
    pub fn open(config: &Config) -> Result<Self> {
        let endpoints = config.endpoints();
        let origin = Self::origin_of(config)?;
        let jar_path = jar::session_path();
        let jar = jar::load_cookie_jar(&origin, &jar_path)?;
        let backend = HttpBackend::with_cookie_jar(endpoints.clone(), jar.clone())?;

        Ok(Self {
            controller: ViewController::new(backend, TerminalNavigator, endpoints),
            jar,
            origin,
            jar_path,
        })
    }

    /// The normalized backend origin; the CLI has no page origin to fall back on.
    ///
    /// # Errors
    /// Fails when no origin is configured or it does not parse as a URL.
    pub fn origin_of(config: &Config) -> Result<Url> {
        let endpoints = config.endpoints();
        let origin = endpoints
            .origin()
            .ok_or_else(|| anyhow!("no backend origin configured; pass --api-url or set {API_URL_ENV}"))?;
        Url::parse(origin).context("invalid backend origin")
    }

    /// Resolves the session, as page load does.
    pub async fn start(&mut self) -> ViewState {
        let state = self.controller.start().await;
        tracing::debug!(%state, "session resolved");
        state
    }

    /// Writes back any cookies the backend set or refreshed.
    ///
    /// # Errors
    /// Fails when the jar file cannot be written.
    pub fn save(&self) -> Result<()> {
        jar::persist_cookie_jar(&self.jar, &self.origin, &self.jar_path)
    }

    /// Navigates to the logout endpoint, then drops every stored cookie.
    ///
    /// # Errors
    /// Fails unless the view is authenticated, or when the jar cannot be removed.
    pub fn logout(&self) -> Result<()> {
        self.controller.logout()?;
        jar::clear(&self.jar_path)?;
        Ok(())
    }

    /// Runs one greeting action and returns its pretty-printed result.
    ///
    /// # Errors
    /// Fails unless the view is authenticated, or with the recorded error
    /// message when the request itself failed.
    pub async fn greet(&mut self, kind: GreetingKind) -> Result<String> {
        match kind {
            GreetingKind::Get => self.controller.send_get_greeting().await?,
            GreetingKind::Post => self.controller.send_post_greeting().await?,
        }
        let model = self.controller.model();
        if let Some(error) = model.error() {
            bail!("{error}");
        }
        model
            .greeting(kind)
            .map(pretty_json)
            .ok_or_else(|| anyhow!("{kind} returned no result"))
    }
}

/// Text rendering of the current view.
pub fn render_view(model: &ViewModel) -> String {
    let mut out = String::new();
    match (model.view_state(), model.session()) {
        (ViewState::Authenticated, Some(session)) => {
            let _ = writeln!(out, "Logged in as {}", session_summary(session));
            if !session.picture.is_empty() {
                let _ = writeln!(out, "Picture: {}", session.picture);
            }
            for kind in [GreetingKind::Get, GreetingKind::Post] {
                if let Some(value) = model.greeting(kind) {
                    let _ = writeln!(out, "{kind}:\n{}", pretty_json(value));
                }
            }
            if !model.draft().is_empty() {
                let _ = writeln!(out, "Draft: {}", model.draft());
            }
            if let Some(error) = model.error() {
                let _ = writeln!(out, "Error: {error}");
            }
        }
        (ViewState::Resolving, _) => out.push_str("Loading...\n"),
        _ => out.push_str("You are not logged in.\n"),
    }
    out
}

pub async fn whoami(config: &Config) -> Result<()> {
    let mut workspace = Workspace::open(config)?;
    workspace.start().await;
    print!("{}", render_view(workspace.controller.model()));
    workspace.save()
}

pub async fn login(config: &Config) -> Result<()> {
    let mut workspace = Workspace::open(config)?;
    workspace.start().await;
    workspace.controller.login()?;
    println!("After signing in, copy the session cookie and run `oauthdemo cookie import`.");
    Ok(())
}

pub async fn logout(config: &Config) -> Result<()> {
    let mut workspace = Workspace::open(config)?;
    workspace.start().await;
    workspace.logout()?;
    println!("Local session removed.");
    Ok(())
}

pub async fn hello(config: &Config, command: HelloCommand) -> Result<()> {
    let mut workspace = Workspace::open(config)?;
    workspace.start().await;

    let kind = match command {
        HelloCommand::Get => GreetingKind::Get,
        HelloCommand::Post { message } => {
            workspace.controller.set_draft(message)?;
            GreetingKind::Post
        }
    };
    let result = workspace.greet(kind).await;
    workspace.save()?;
    println!("{}", result?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::client::BackendError;
    use shared::models::{Session, UserResponse};
    use serde_json::json;

    fn signed_in() -> ViewModel {
        let mut model = ViewModel::new();
        model.apply_session(Ok(UserResponse::from(Session {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            picture: "https://example.com/ada.png".to_string(),
        })));
        model
    }

    #[test]
    fn renders_each_state() {
        let mut model = ViewModel::new();
        assert_eq!(render_view(&model), "Loading...\n");

        model.apply_session(Err(BackendError::Status(500)));
        assert_eq!(render_view(&model), "You are not logged in.\n");
    }

    #[test]
    fn renders_profile_results_and_error() {
        let mut model = signed_in();
        let ticket = model.begin_greeting(GreetingKind::Get).unwrap();
        model.finish_greeting(ticket, Ok(json!({"msg": "hi"})));
        let ticket = model.begin_greeting(GreetingKind::Post).unwrap();
        model.finish_greeting(ticket, Err(BackendError::Status(500)));

        let text = render_view(&model);
        assert!(text.starts_with("Logged in as Ada <ada@example.com>\n"));
        assert!(text.contains("Picture: https://example.com/ada.png"));
        assert!(text.contains("GET /api/hello:\n{\n  \"msg\": \"hi\"\n}"));
        assert!(!text.contains("POST /api/hello:"));
        assert!(text.contains("Error: POST /api/hello failed: 500"));
    }

    #[test]
    fn open_requires_origin() {
        let err = Workspace::open(&Config::with_defaults()).err().unwrap();
        assert!(err.to_string().contains("no backend origin configured"));
    }
}
