//! # Client Configuration
//!
//! Backend origin and transport options for [`UserServiceClient`].
//!
//! Values are read from environment variables by [`ClientConfig::from_env()`]
//! and validated before the client is built:
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `USER_SERVICE_URL` | `http://localhost:8000` | Backend origin |
//! | `USER_SERVICE_TIMEOUT_SECS` | unset (no timeout) | Per-request timeout |
//! | `USER_SERVICE_CSRF_TOKEN` | unset | Seeds the `csrftoken` cookie |
//! | `USER_SERVICE_SESSION_ID` | unset | Seeds the `sessionid` cookie |
//!
//! [`UserServiceClient`]: crate::services::api::UserServiceClient

use std::env;
use std::time::Duration;

use url::Url;

use crate::core::error::{ClientError, Result};

/// Backend origin used when `USER_SERVICE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend origin all endpoint paths are appended to
    pub base_url: Url,

    /// Request timeout; `None` leaves the transport default (no timeout)
    pub timeout: Option<Duration>,

    /// `csrftoken` cookie value to seed the cookie jar with
    pub csrf_token: Option<String>,

    /// `sessionid` cookie value to seed the cookie jar with
    pub session_id: Option<String>,
}

impl ClientConfig {
    /// Configuration for the given origin with no timeout and no seeded cookies.
    pub fn new(base_url: &str) -> Result<Self> {
        let config = Self {
            base_url: Url::parse(base_url)?,
            timeout: None,
            csrf_token: None,
            session_id: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from environment variables, with `base_url` (when
    /// given) taking the place of `USER_SERVICE_URL`.
    pub fn from_env_with_base_url(base_url: Option<&str>) -> Result<Self> {
        Self::from_vars(override_base_url(|key| env::var(key).ok(), base_url))
    }

    fn from_vars<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = get("USER_SERVICE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(&base_url)?;

        if let Some(raw) = get("USER_SERVICE_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|e| {
                ClientError::Config(format!("USER_SERVICE_TIMEOUT_SECS must be a valid number: {}", e))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        config.csrf_token = get("USER_SERVICE_CSRF_TOKEN").filter(|v| !v.is_empty());
        config.session_id = get("USER_SERVICE_SESSION_ID").filter(|v| !v.is_empty());

        config.validate()?;
        Ok(config)
    }

    /// Validate the origin and timeout.
    pub fn validate(&self) -> Result<()> {
        match self.base_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ClientError::Config(format!(
                    "base URL scheme must be http or https, got '{}'",
                    other
                )))
            }
        }

        if self.base_url.host_str().is_none() {
            return Err(ClientError::Config("base URL must include a host".to_string()));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(ClientError::Config("timeout must be greater than zero".to_string()));
        }

        Ok(())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

fn override_base_url<'a, F>(get: F, base_url: Option<&'a str>) -> impl Fn(&str) -> Option<String> + 'a
where
    F: Fn(&str) -> Option<String> + 'a,
{
    move |key| match (key, base_url) {
        ("USER_SERVICE_URL", Some(url)) => Some(url.to_string()),
        _ => get(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.timeout, None);
        assert_eq!(config.csrf_token, None);
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_vars(vars(&[
            ("USER_SERVICE_URL", "https://social.example.com"),
            ("USER_SERVICE_TIMEOUT_SECS", "15"),
            ("USER_SERVICE_CSRF_TOKEN", "tok"),
            ("USER_SERVICE_SESSION_ID", ""),
        ]))
        .unwrap();

        assert_eq!(config.base_url.host_str(), Some("social.example.com"));
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.csrf_token.as_deref(), Some("tok"));
        assert_eq!(config.session_id, None);
    }

    #[test]
    fn test_base_url_override_keeps_other_settings() {
        let env = vars(&[
            ("USER_SERVICE_URL", "not a url"),
            ("USER_SERVICE_TIMEOUT_SECS", "15"),
            ("USER_SERVICE_CSRF_TOKEN", "tok"),
            ("USER_SERVICE_SESSION_ID", "sess"),
        ]);
        let config =
            ClientConfig::from_vars(override_base_url(env, Some("https://social.example.com/backend/")))
                .unwrap();

        assert_eq!(config.base_url.as_str(), "https://social.example.com/backend/");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.csrf_token.as_deref(), Some("tok"));
        assert_eq!(config.session_id.as_deref(), Some("sess"));

        let env = vars(&[("USER_SERVICE_URL", "https://social.example.com")]);
        let config = ClientConfig::from_vars(override_base_url(env, None)).unwrap();
        assert_eq!(config.base_url.host_str(), Some("social.example.com"));

        assert!(ClientConfig::from_vars(override_base_url(vars(&[]), Some("ftp://x"))).is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(ClientConfig::from_vars(vars(&[("USER_SERVICE_TIMEOUT_SECS", "soon")])).is_err());
        assert!(ClientConfig::from_vars(vars(&[("USER_SERVICE_TIMEOUT_SECS", "0")])).is_err());
        assert!(ClientConfig::new("ftp://files.example.com").is_err());
        assert!(ClientConfig::new("not a url").is_err());
    }
}
