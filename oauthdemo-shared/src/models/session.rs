use serde::{Deserialize, Serialize};

/// Body returned by `GET /api/user`.
///
/// The backend answers with `{"authenticated": false}` for anonymous visitors
/// rather than an HTTP error, so every field but the flag is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    /// Whether the backend holds an authenticated OAuth2 principal for this cookie.
    pub authenticated: bool,

    /// Display name reported by the identity provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Email address reported by the identity provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Avatar URL reported by the identity provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl UserResponse {
    /// An anonymous session-check answer.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Converts the wire shape into the client-side session record.
    ///
    /// Returns `None` when the backend reported no authenticated user.
    #[must_use]
    pub fn into_session(self) -> Option<Session> {
        if !self.authenticated {
            return None;
        }

        Some(Session {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            picture: self.picture.unwrap_or_default(),
        })
    }
}

/// The authenticated user as seen by the front-end.
///
/// Presence of a `Session` implies the backend reported `authenticated: true`;
/// an anonymous visitor has no session at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub picture: String,
}

impl From<Session> for UserResponse {
    fn from(session: Session) -> Self {
        Self {
            authenticated: true,
            name: Some(session.name),
            email: Some(session.email),
            picture: Some(session.picture),
        }
    }
}
