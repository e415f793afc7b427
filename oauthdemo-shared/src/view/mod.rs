//! # View state machine
//!
//! [`ViewModel`] owns everything the UI renders: the resolved session, the two
//! greeting results, the last error, and the POST draft. It is synchronous so
//! a UI store can hold it directly; [`ViewController`] wraps it with a backend
//! and a navigator for callers that want to `await` whole actions.
//!
//! The model starts in [`ViewState::Resolving`] and settles exactly once into
//! [`ViewState::Anonymous`] or [`ViewState::Authenticated`]. Only
//! [`ViewModel::reset`], standing in for a full page reload, goes back.

mod controller;

pub use controller::{Navigator, ViewController};

use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::client::BackendResult;
use crate::endpoints::Endpoints;
use crate::models::{GreetingKind, Session, UserResponse};

/// Which screen the front-end shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// The startup session check has not settled yet.
    Resolving,
    /// No session: show the sign-in prompt.
    Anonymous,
    /// A session exists: show the profile and greeting controls.
    Authenticated,
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Resolving => "resolving",
            Self::Anonymous => "anonymous",
            Self::Authenticated => "authenticated",
        })
    }
}

/// A user action that does not apply to the current view.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{action} is not available while {state}")]
pub struct ViewError {
    pub action: &'static str,
    pub state: ViewState,
}

/// Stamp captured when a greeting starts.
///
/// A completion carrying a ticket from before the last [`ViewModel::reset`] is
/// dropped instead of being written into the fresh state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    kind: GreetingKind,
    epoch: u64,
}

/// UI state for a single page load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    resolved: bool,
    session: Option<Session>,
    greeting_get: Option<Value>,
    greeting_post: Option<Value>,
    error: Option<String>,
    draft: String,
    epoch: u64,
}

impl ViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The screen derived from the session and whether it has been resolved.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        match (self.resolved, &self.session) {
            (false, _) => ViewState::Resolving,
            (true, None) => ViewState::Anonymous,
            (true, Some(_)) => ViewState::Authenticated,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Last successful result of the given greeting operation.
    #[must_use]
    pub fn greeting(&self, kind: GreetingKind) -> Option<&Value> {
        match kind {
            GreetingKind::Get => self.greeting_get.as_ref(),
            GreetingKind::Post => self.greeting_post.as_ref(),
        }
    }

    /// Message describing the most recent failed greeting, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Applies the outcome of the startup session check.
    ///
    /// `authenticated: false` and any failure both settle into
    /// [`ViewState::Anonymous`]; the failure is logged, never surfaced. Returns
    /// `false` and changes nothing when the session was already resolved.
    pub fn apply_session(&mut self, outcome: BackendResult<UserResponse>) -> bool {
        if self.resolved {
            debug!("ignoring session check after the view settled");
            return false;
        }

        self.session = match outcome {
            Ok(body) => body.into_session(),
            Err(err) => {
                warn!(error = %err, "session check failed; treating visitor as anonymous");
                None
            }
        };
        self.resolved = true;
        debug!(state = %self.view_state(), "session resolved");
        true
    }

    /// Issues a ticket for a greeting call without touching state.
    ///
    /// UI stores that cannot hand values out of a mutation read the ticket
    /// first and then apply [`ViewModel::begin_greeting`].
    ///
    /// # Errors
    /// Returns [`ViewError`] unless the view is authenticated.
    pub fn ticket(&self, kind: GreetingKind) -> Result<Ticket, ViewError> {
        self.require(ViewState::Authenticated, greeting_action(kind))?;
        Ok(Ticket {
            kind,
            epoch: self.epoch,
        })
    }

    /// Starts a greeting call: clears the previous error and issues a ticket.
    ///
    /// # Errors
    /// Returns [`ViewError`] unless the view is authenticated.
    pub fn begin_greeting(&mut self, kind: GreetingKind) -> Result<Ticket, ViewError> {
        let ticket = self.ticket(kind)?;
        self.error = None;
        Ok(ticket)
    }

    /// Applies a greeting outcome.
    ///
    /// Success overwrites that operation's result; failure records
    /// `"<operation> failed: <status-or-message>"` and keeps the previous
    /// result. Returns `false` when the ticket predates the last reset.
    pub fn finish_greeting(&mut self, ticket: Ticket, outcome: BackendResult<Value>) -> bool {
        if ticket.epoch != self.epoch {
            debug!(kind = %ticket.kind, "dropping stale greeting response");
            return false;
        }

        match outcome {
            Ok(value) => match ticket.kind {
                GreetingKind::Get => self.greeting_get = Some(value),
                GreetingKind::Post => self.greeting_post = Some(value),
            },
            Err(err) => {
                self.error = Some(format!("{} failed: {}", ticket.kind.label(), err.detail()));
            }
        }
        true
    }

    /// Replaces the POST draft with the input control's current text.
    ///
    /// # Errors
    /// Returns [`ViewError`] unless the view is authenticated.
    pub fn set_draft(&mut self, text: impl Into<String>) -> Result<(), ViewError> {
        self.require(ViewState::Authenticated, "editing the message")?;
        self.draft = text.into();
        Ok(())
    }

    /// URL the browser should open to sign in.
    ///
    /// # Errors
    /// Returns [`ViewError`] unless the view is anonymous.
    pub fn login_target(&self, endpoints: &Endpoints) -> Result<String, ViewError> {
        self.require(ViewState::Anonymous, "login")?;
        Ok(endpoints.login())
    }

    /// URL the browser should open to sign out.
    ///
    /// # Errors
    /// Returns [`ViewError`] unless the view is authenticated.
    pub fn logout_target(&self, endpoints: &Endpoints) -> Result<String, ViewError> {
        self.require(ViewState::Authenticated, "logout")?;
        Ok(endpoints.logout())
    }

    /// Returns to [`ViewState::Resolving`] with empty state, as after a page reload.
    pub fn reset(&mut self) {
        *self = Self {
            epoch: self.epoch.wrapping_add(1),
            ..Self::default()
        };
    }

    fn require(&self, expected: ViewState, action: &'static str) -> Result<(), ViewError> {
        let state = self.view_state();
        if state == expected {
            Ok(())
        } else {
            Err(ViewError { action, state })
        }
    }
}

const fn greeting_action(kind: GreetingKind) -> &'static str {
    match kind {
        GreetingKind::Get => "sending GET /api/hello",
        GreetingKind::Post => "sending POST /api/hello",
    }
}
