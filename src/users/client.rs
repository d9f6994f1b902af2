//! HTTP client for the user management REST API.
//!
//! One configured [`reqwest::Client`] is built up front and reused by every
//! operation; the five operations map one to one onto the `/users` endpoints.
//! Failures, whether transport errors or non-success statuses, propagate to
//! the caller as the underlying error. Nothing is retried or rewritten here.

use crate::config::ApiConfig;
use crate::users::types::User;
use anyhow::{Result, anyhow};
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{Instrument, debug, info_span};
use url::Url;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the `/users` endpoints, bound to one base URL.
///
/// Build it once at the composition root and hand it to whatever needs the
/// operations. It holds no mutable state and is cheap to clone.
#[derive(Clone, Debug)]
pub struct UserApi {
    http: Client,
    base_url: String,
}

impl UserApi {
    /// Builds a client for the configured base URL. Every request it sends
    /// carries `Content-Type: application/json` by default.
    ///
    /// # Errors
    /// Returns an error if the base URL is not an absolute http(s) URL or the
    /// underlying client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Fetch all user records
    /// # Errors
    /// Returns an error if the request fails or the server answers with a non-success status.
    pub async fn list(&self) -> Result<Vec<User>> {
        let url = self.endpoint("/users");

        let span = info_span!(
            "users.list",
            http.method = "GET",
            url = %url
        );
        let response = self.http.get(&url).send().instrument(span).await?;

        let users: Vec<User> = response.error_for_status()?.json().await?;

        Ok(users)
    }

    /// Fetch one user record by username
    /// # Errors
    /// Returns an error if the username is empty, the request fails, or the server answers with a non-success status.
    pub async fn get(&self, username: &str) -> Result<User> {
        let url = self.user_endpoint(username)?;

        let span = info_span!(
            "users.get",
            http.method = "GET",
            url = %url
        );
        let response = self.http.get(&url).send().instrument(span).await?;

        let user: User = response.error_for_status()?.json().await?;

        Ok(user)
    }

    /// Create a user from the given payload, sent verbatim as the request body
    /// # Errors
    /// Returns an error if the request fails or the server answers with a non-success status.
    pub async fn create(&self, payload: &Value) -> Result<User> {
        let url = self.endpoint("/users");

        let span = info_span!(
            "users.create",
            http.method = "POST",
            url = %url
        );
        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .instrument(span)
            .await?;

        let user: User = response.error_for_status()?.json().await?;

        Ok(user)
    }

    /// Update a user from the given payload, sent verbatim as the request body
    /// # Errors
    /// Returns an error if the username is empty, the request fails, or the server answers with a non-success status.
    pub async fn update(&self, username: &str, payload: &Value) -> Result<User> {
        let url = self.user_endpoint(username)?;

        let span = info_span!(
            "users.update",
            http.method = "PUT",
            url = %url
        );
        let response = self
            .http
            .put(&url)
            .json(payload)
            .send()
            .instrument(span)
            .await?;

        let user: User = response.error_for_status()?.json().await?;

        Ok(user)
    }

    /// Delete a user and return the server's acknowledgment body as-is
    /// # Errors
    /// Returns an error if the username is empty, the request fails, or the server answers with a non-success status.
    pub async fn delete(&self, username: &str) -> Result<Value> {
        let url = self.user_endpoint(username)?;

        let span = info_span!(
            "users.delete",
            http.method = "DELETE",
            url = %url
        );
        let response = self.http.delete(&url).send().instrument(span).await?;

        let ack: Value = response.error_for_status()?.json().await?;

        Ok(ack)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn user_endpoint(&self, username: &str) -> Result<String> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("username is required"));
        }

        Ok(self.endpoint(&format!("/users/{trimmed}")))
    }
}

/// # Errors
/// Returns an error if `url` cannot be parsed, has no host, or uses an unsupported scheme.
fn base_url(url: &str) -> Result<String> {
    // String joining keeps a path suffix such as /api intact
    let trimmed = url.trim().trim_end_matches('/');

    let parsed = Url::parse(trimmed)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(anyhow!("Error parsing URL: unsupported scheme {scheme}"));
    }

    if parsed.host().is_none() {
        return Err(anyhow!("Error parsing URL: no host specified"));
    }

    debug!("API base URL: {}", trimmed);

    Ok(trimmed.to_string())
}
