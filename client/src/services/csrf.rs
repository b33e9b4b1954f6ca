//! # CSRF Credentials
//!
//! The backend expects every state-changing request to echo the `csrftoken`
//! cookie back in the `X-CSRFToken` header. The token is read at call time
//! through a [`CredentialProvider`], so the client never touches ambient
//! cookie state directly.

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use url::Url;

/// Name of the cookie carrying the CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header the backend reads the CSRF token from.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Source of the CSRF token attached to mutating requests.
pub trait CredentialProvider: Send + Sync {
    /// Current token, or `None` when no token is available.
    fn csrf_token(&self) -> Option<String>;
}

/// Reads `csrftoken` from the cookie jar shared with the HTTP client.
///
/// Cookies the backend sets on any response land in the same jar, so the
/// token tracks whatever the server last issued.
#[derive(Clone)]
pub struct CookieJarCredentials {
    jar: Arc<Jar>,
    origin: Url,
}

impl CookieJarCredentials {
    pub fn new(jar: Arc<Jar>, origin: Url) -> Self {
        Self { jar, origin }
    }
}

impl CredentialProvider for CookieJarCredentials {
    fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.origin)?;
        let header = header.to_str().ok()?;
        parse_csrf_cookie(header)
    }
}

/// Fixed token, for scripted use and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    token: Option<String>,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

impl CredentialProvider for StaticCredentials {
    fn csrf_token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// Extract the `csrftoken` value from a `Cookie` header string.
///
/// Entries are separated by `"; "`. The value is the text after the first `=`
/// and before any further `=`.
pub fn parse_csrf_cookie(header: &str) -> Option<String> {
    let prefix = format!("{}=", CSRF_COOKIE);
    header
        .split("; ")
        .find(|row| row.starts_with(&prefix))
        .and_then(|row| row.split('=').nth(1))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csrf_cookie() {
        assert_eq!(
            parse_csrf_cookie("sessionid=abc; csrftoken=xyz123"),
            Some("xyz123".to_string())
        );
        assert_eq!(parse_csrf_cookie("csrftoken=only"), Some("only".to_string()));
        assert_eq!(parse_csrf_cookie("sessionid=abc"), None);
        assert_eq!(parse_csrf_cookie(""), None);
    }

    #[test]
    fn test_parse_csrf_cookie_edge_cases() {
        // Prefix match on the whole name, not a substring
        assert_eq!(parse_csrf_cookie("xcsrftoken=nope"), None);
        assert_eq!(parse_csrf_cookie("csrftoken="), Some(String::new()));
        assert_eq!(parse_csrf_cookie("csrftoken=a=b"), Some("a".to_string()));
    }

    #[test]
    fn test_cookie_jar_credentials() {
        let origin = Url::parse("http://localhost:8000").unwrap();
        let jar = Arc::new(Jar::default());
        let credentials = CookieJarCredentials::new(jar.clone(), origin.clone());

        assert_eq!(credentials.csrf_token(), None);

        jar.add_cookie_str("sessionid=s1; Path=/", &origin);
        jar.add_cookie_str("csrftoken=tok42; Path=/", &origin);
        assert_eq!(credentials.csrf_token(), Some("tok42".to_string()));

        jar.add_cookie_str("csrftoken=rotated; Path=/", &origin);
        assert_eq!(credentials.csrf_token(), Some("rotated".to_string()));
    }

    #[test]
    fn test_static_credentials() {
        assert_eq!(StaticCredentials::new("t").csrf_token(), Some("t".to_string()));
        assert_eq!(StaticCredentials::none().csrf_token(), None);
    }
}
