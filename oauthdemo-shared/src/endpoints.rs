//! # Backend origin handling
//!
//! The backend origin is configured as a loose string (`example.com/`,
//! `http://localhost:8080`, or nothing at all). [`normalize_origin`] turns it
//! into a canonical absolute URL and [`Endpoints`] derives every route the
//! front-ends talk to from it.

/// Session check path.
pub const USER_PATH: &str = "/api/user";
/// Greeting endpoint path, shared by `GET` and `POST`.
pub const HELLO_PATH: &str = "/api/hello";
/// Spring Security's Google authorization entry point.
pub const LOGIN_PATH: &str = "/oauth2/authorization/google";
/// Backend logout path.
pub const LOGOUT_PATH: &str = "/logout";

/// Normalizes a configured backend origin.
///
/// Trailing slashes are stripped and `https://` is prepended when no
/// `http://` or `https://` scheme is present. Empty input stays empty. Host
/// syntax is not validated: garbage in, garbage out.
///
/// ```
/// use shared::endpoints::normalize_origin;
///
/// assert_eq!(normalize_origin("example.com/"), "https://example.com");
/// assert_eq!(normalize_origin("http://example.com///"), "http://example.com");
/// assert_eq!(normalize_origin(""), "");
/// ```
#[must_use]
pub fn normalize_origin(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Absolute (or, without an origin, page-relative) URLs for every backend route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    origin: Option<String>,
}

impl Endpoints {
    /// Builds endpoints from an optional configured origin.
    ///
    /// A missing or blank origin yields relative paths such as `/api/user`, so
    /// requests go to whatever origin served the page.
    #[must_use]
    pub fn new(configured: Option<&str>) -> Self {
        let origin = configured
            .map(normalize_origin)
            .filter(|origin| !origin.is_empty());
        Self { origin }
    }

    /// Endpoints with no configured origin.
    #[must_use]
    pub fn relative() -> Self {
        Self::default()
    }

    /// Fills a missing origin with the origin of the page the front-end runs on.
    ///
    /// HTTP clients that cannot resolve relative URLs use this to keep the
    /// same-origin behaviour of an unconfigured backend.
    #[must_use]
    pub fn or_page_origin(self, page_origin: &str) -> Self {
        if self.origin.is_some() {
            return self;
        }
        Self::new(Some(page_origin))
    }

    /// The normalized origin, if one was configured.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    fn join(&self, path: &str) -> String {
        match &self.origin {
            Some(origin) => format!("{origin}{path}"),
            None => path.to_string(),
        }
    }

    #[must_use]
    pub fn user(&self) -> String {
        self.join(USER_PATH)
    }

    #[must_use]
    pub fn hello(&self) -> String {
        self.join(HELLO_PATH)
    }

    /// Where the browser goes to start the Google sign-in.
    #[must_use]
    pub fn login(&self) -> String {
        self.join(LOGIN_PATH)
    }

    /// Where the browser goes to end the backend session.
    #[must_use]
    pub fn logout(&self) -> String {
        self.join(LOGOUT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_https_to_bare_hosts() {
        assert_eq!(normalize_origin("example.com/"), "https://example.com");
        assert_eq!(normalize_origin("example.com"), "https://example.com");
        assert_eq!(normalize_origin("localhost:8080"), "https://localhost:8080");
    }

    #[test]
    fn keeps_explicit_schemes() {
        assert_eq!(normalize_origin("http://example.com///"), "http://example.com");
        assert_eq!(normalize_origin("https://example.com/"), "https://example.com");
        assert_eq!(
            normalize_origin("http://localhost:8080"),
            "http://localhost:8080"
        );
    }

    #[test]
    fn empty_input_passes_through() {
        assert_eq!(normalize_origin(""), "");
        assert_eq!(normalize_origin("   "), "");
        assert_eq!(normalize_origin("///"), "");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            normalize_origin("  api.example.com/ \n"),
            "https://api.example.com"
        );
    }

    #[test]
    fn output_never_ends_with_slash_and_has_one_scheme() {
        for input in [
            "a.io",
            "a.io/",
            "a.io//",
            "http://a.io",
            "https://a.io/",
            "https://a.io/base/",
            "a.io/base//",
        ] {
            let out = normalize_origin(input);
            assert!(!out.ends_with('/'), "{input} -> {out}");
            let schemes = [out.starts_with("http://"), out.starts_with("https://")];
            assert_eq!(schemes.iter().filter(|s| **s).count(), 1, "{input} -> {out}");
        }
    }

    #[test]
    fn malformed_hosts_are_not_rejected() {
        assert_eq!(normalize_origin("not a host/"), "https://not a host");
        assert_eq!(normalize_origin("ftp://x"), "https://ftp://x");
    }

    #[test]
    fn endpoints_with_origin_are_absolute() {
        let endpoints = Endpoints::new(Some("api.example.com/"));
        assert_eq!(endpoints.origin(), Some("https://api.example.com"));
        assert_eq!(endpoints.user(), "https://api.example.com/api/user");
        assert_eq!(endpoints.hello(), "https://api.example.com/api/hello");
        assert_eq!(
            endpoints.login(),
            "https://api.example.com/oauth2/authorization/google"
        );
        assert_eq!(endpoints.logout(), "https://api.example.com/logout");
    }

    #[test]
    fn endpoints_without_origin_are_relative() {
        for endpoints in [Endpoints::new(None), Endpoints::new(Some("")), Endpoints::relative()] {
            assert_eq!(endpoints.origin(), None);
            assert_eq!(endpoints.user(), "/api/user");
            assert_eq!(endpoints.login(), "/oauth2/authorization/google");
        }
    }

    #[test]
    fn page_origin_only_fills_a_missing_origin() {
        let filled = Endpoints::new(None).or_page_origin("http://localhost:5173");
        assert_eq!(filled.hello(), "http://localhost:5173/api/hello");

        let kept = Endpoints::new(Some("https://api.example.com"))
            .or_page_origin("http://localhost:5173");
        assert_eq!(kept.hello(), "https://api.example.com/api/hello");
    }
}
