use std::fmt;

/// Error code the backend appends when the OAuth2 exchange fails.
pub const LOGIN_FAILED_CODE: &str = "login_failed";

/// A notice carried back to the front-end in the redirect query string.
///
/// After a failed sign-in the backend redirects to `{frontend}/?error=login_failed`.
/// The anonymous view surfaces it next to the sign-in prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginNotice {
    /// The backend rejected the OAuth2 exchange.
    LoginFailed,
    /// Any other `error` value, kept verbatim.
    Other(String),
}

impl LoginNotice {
    /// Extracts a notice from a query string, with or without the leading `?`.
    ///
    /// Returns `None` when there is no non-empty `error` parameter.
    #[must_use]
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "error")
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(|value| {
                if value == LOGIN_FAILED_CODE {
                    Self::LoginFailed
                } else {
                    Self::Other(value)
                }
            })
    }
}

impl fmt::Display for LoginNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoginFailed => f.write_str("Sign-in failed. Please try again."),
            Self::Other(code) => write!(f, "Sign-in failed: {code}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_login_failed() {
        assert_eq!(
            LoginNotice::from_query("?error=login_failed"),
            Some(LoginNotice::LoginFailed)
        );
        assert_eq!(
            LoginNotice::LoginFailed.to_string(),
            "Sign-in failed. Please try again."
        );
    }

    #[test]
    fn keeps_unknown_codes() {
        let notice = LoginNotice::from_query("state=abc&error=access%20denied").unwrap();
        assert_eq!(notice, LoginNotice::Other("access denied".into()));
        assert_eq!(notice.to_string(), "Sign-in failed: access denied");
    }

    #[test]
    fn ignores_queries_without_error() {
        assert_eq!(LoginNotice::from_query(""), None);
        assert_eq!(LoginNotice::from_query("?"), None);
        assert_eq!(LoginNotice::from_query("?code=xyz"), None);
        assert_eq!(LoginNotice::from_query("?error="), None);
    }
}
