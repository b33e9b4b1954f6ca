//! # API Client
//!
//! Main HTTP client for user service communication.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::{Client, RequestBuilder, Response};
use shared::{ErrorResponse, Friend, FriendRequest, UpdateUserInfoDto, User};
use url::Url;

use crate::config::ClientConfig;
use crate::core::error::{ClientError, Result};
use crate::core::service::UserService;
use crate::services::csrf::{CookieJarCredentials, CredentialProvider, CSRF_COOKIE, CSRF_HEADER};

/// HTTP client for the user service backend.
///
/// Every request is credentialed: the underlying `reqwest::Client` stores
/// cookies the server sets (session, CSRF) in a jar and sends them back.
/// The client is `Send + Sync` and can be shared across tasks behind an `Arc`.
pub struct UserServiceClient {
    pub(crate) client: Client,
    config: ClientConfig,
    jar: Arc<Jar>,
    credentials: Arc<dyn CredentialProvider>,
}

impl UserServiceClient {
    /// Create a client whose CSRF token is read from its own cookie jar.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let credentials = Arc::new(CookieJarCredentials::new(jar.clone(), config.base_url.clone()));
        Self::build(config, jar, credentials)
    }

    /// Create a client with an explicit CSRF token source.
    pub fn with_credentials(
        config: ClientConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self> {
        Self::build(config, Arc::new(Jar::default()), credentials)
    }

    fn build(
        config: ClientConfig,
        jar: Arc<Jar>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self> {
        config.validate()?;

        if let Some(token) = &config.csrf_token {
            jar.add_cookie_str(&format!("{}={}; Path=/", CSRF_COOKIE, token), &config.base_url);
        }
        if let Some(session_id) = &config.session_id {
            jar.add_cookie_str(&format!("sessionid={}; Path=/", session_id), &config.base_url);
        }

        let mut builder = Client::builder().cookie_provider(jar.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "User service client created");

        Ok(Self {
            client,
            config,
            jar,
            credentials,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Cookie jar shared with the HTTP client.
    pub fn cookie_jar(&self) -> &Arc<Jar> {
        &self.jar
    }

    /// Build an endpoint URL from path segments, with a trailing slash.
    ///
    /// Segments are percent-encoded, so a username cannot escape its segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.config.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| ClientError::Config("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    /// CSRF token for the next request; empty when none is available.
    pub(crate) fn csrf_token(&self) -> String {
        self.credentials.csrf_token().unwrap_or_default()
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.client.get(url)
    }

    /// POST with the `X-CSRFToken` header attached.
    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.client.post(url).header(CSRF_HEADER, self.csrf_token())
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|e| {
            tracing::debug!(error = %e, "Request did not complete");
            ClientError::Network(e.to_string())
        })
    }

    /// Turn a non-success response into an error, preferring the server's
    /// `error` message over `fallback`.
    pub(crate) async fn server_error(response: Response, fallback: &str) -> ClientError {
        let status = response.status().as_u16();
        // Non-JSON bodies count as carrying no message.
        let body = response.json::<ErrorResponse>().await.unwrap_or_default();
        let from_server = body.message().is_some();
        let message = body.message_or(fallback);
        if from_server {
            ClientError::server(status, message)
        } else {
            ClientError::status(status, message)
        }
    }
}

impl std::fmt::Debug for UserServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceClient")
            .field("base_url", &self.config.base_url.as_str())
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl UserService for UserServiceClient {
    async fn get_user_by_username(&self, username: &str) -> Result<User> {
        UserServiceClient::get_user_by_username(self, username).await
    }

    async fn send_friend_request(&self, receiver_id: i64) -> bool {
        UserServiceClient::send_friend_request(self, receiver_id).await
    }

    async fn get_friends(&self, username: &str) -> Result<Vec<Friend>> {
        UserServiceClient::get_friends(self, username).await
    }

    async fn get_friend_requests(&self) -> Result<Vec<FriendRequest>> {
        UserServiceClient::get_friend_requests(self).await
    }

    async fn accept_friend_request(&self, request_id: i64) -> bool {
        UserServiceClient::accept_friend_request(self, request_id).await
    }

    async fn reject_friend_request(&self, request_id: i64) -> bool {
        UserServiceClient::reject_friend_request(self, request_id).await
    }

    async fn update_general_info(&self, name: &str, email: &str) -> Result<UpdateUserInfoDto> {
        UserServiceClient::update_general_info(self, name, email).await
    }

    async fn update_password(&self, password1: &str, password2: &str) -> bool {
        UserServiceClient::update_password(self, password1, password2).await
    }
}
