// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the Nice controller.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::command::Command;
use crate::error::ProtocolError;

// ============================================================================
// HttpConfig
// ============================================================================

/// Configuration for a Nice controller connection.
///
/// # Examples
///
/// ```
/// use nice_blinds::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("http://192.168.1.20/")
///     .with_credentials("admin", "password")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "http://192.168.1.20");
/// assert_eq!(config.credentials(), Some(("admin", "password")));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    base_url: String,
    credentials: Option<(String, String)>,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the controller at `base_url`.
    ///
    /// Trailing slashes are removed. The scheme is validated when the
    /// client is created.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets basic authentication credentials.
    ///
    /// Credentials are only sent when both values are non-empty.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let (username, password) = (username.into(), password.into());
        self.credentials = if username.is_empty() || password.is_empty() {
            None
        } else {
            Some((username, password))
        };
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the credentials if set.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.credentials
            .as_ref()
            .map(|(u, p)| (u.as_str(), p.as_str()))
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Checks that the base URL uses the `http` or `https` scheme.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` otherwise.
    pub fn validate(&self) -> Result<(), ProtocolError> {
        if self.base_url.starts_with("http://") || self.base_url.starts_with("https://") {
            Ok(())
        } else {
            Err(ProtocolError::InvalidAddress(self.base_url.clone()))
        }
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        self.validate()?;

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        let credentials = self
            .credentials
            .map(|(username, password)| Credentials { username, password });

        Ok(HttpClient {
            base_url: self.base_url,
            client,
            credentials,
        })
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for one Nice controller.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Examples
///
/// ```no_run
/// use nice_blinds::command::DeviceCommand;
/// use nice_blinds::protocol::HttpConfig;
/// use nice_blinds::types::Action;
///
/// # async fn example() -> nice_blinds::Result<()> {
/// let client = HttpConfig::new("http://192.168.1.20")
///     .with_credentials("admin", "password")
///     .into_client()?;
/// let response = client
///     .send(&DeviceCommand::new("1,0F".parse()?, Action::Open))
///     .await?;
/// println!("{}", response.status_line());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    credentials: Option<Credentials>,
}

/// HTTP basic authentication credentials.
#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: String,
}

/// A successful controller response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    body: String,
}

impl HttpResponse {
    /// Creates a response with the given status and body.
    #[must_use]
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the status line, e.g. `"200 OK"`.
    #[must_use]
    pub fn status_line(&self) -> String {
        let reason = StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown");
        format!("{} {reason}", self.status)
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the response and returns the body.
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }
}

/// Returns true if `body` looks like an HTML login page rather than XML.
///
/// The controller answers unauthenticated requests for XML endpoints with
/// its HTML login form instead of a 401, so this substring check is the
/// only way to tell.
///
/// # Examples
///
/// ```
/// use nice_blinds::protocol::looks_like_login_page;
///
/// assert!(looks_like_login_page("<!DOCTYPE html><html><form>...</form></html>"));
/// assert!(looks_like_login_page("Please LOGIN first"));
/// assert!(!looks_like_login_page(r#"<devlst><device adr="1"/></devlst>"#));
/// ```
#[must_use]
pub fn looks_like_login_page(body: &str) -> bool {
    const MARKERS: [&str; 4] = ["<!doctype html", "<html", "login", "password"];

    let lower = body.to_lowercase();
    MARKERS.iter().any(|marker| lower.contains(marker))
}

impl HttpClient {
    /// Returns the base URL of the controller.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns whether basic authentication is configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Sends a request to the controller.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::AuthenticationFailed` on 401,
    /// `ProtocolError::ConnectionFailed` on any other non-success status and
    /// `ProtocolError::Http` on transport failures.
    pub async fn send<C: Command + ?Sized>(
        &self,
        command: &C,
    ) -> Result<HttpResponse, ProtocolError> {
        self.get(&command.to_url(&self.base_url)).await
    }

    /// Sends a request whose response must be XML.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send), plus `ProtocolError::AuthenticationFailed`
    /// when the body looks like a login page.
    pub async fn fetch_xml<C: Command + ?Sized>(
        &self,
        command: &C,
    ) -> Result<HttpResponse, ProtocolError> {
        let response = self.send(command).await?;
        tracing::debug!(bytes = response.body().len(), "Received XML response");

        if looks_like_login_page(response.body()) {
            tracing::error!("Received HTML/login page instead of XML, check credentials");
            return Err(ProtocolError::AuthenticationFailed);
        }

        Ok(response)
    }

    /// Checks whether the controller answers at its base URL.
    ///
    /// Any status below 500 counts as reachable. No credentials are sent.
    pub async fn probe(&self) -> bool {
        tracing::debug!(url = %self.base_url, "Testing connection");
        match self.client.get(&self.base_url).send().await {
            Ok(response) => {
                tracing::debug!(status = response.status().as_u16(), "Connection test response");
                response.status().as_u16() < 500
            }
            Err(err) => {
                tracing::error!(error = %err, "Connection test failed");
                false
            }
        }
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, ProtocolError> {
        tracing::debug!(url = %url, auth = self.credentials.is_some(), "Sending HTTP request");

        let mut request = self.client.get(url);
        if let Some(creds) = &self.credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::error!("Authentication failed (401 Unauthorized)");
            return Err(ProtocolError::AuthenticationFailed);
        }

        if !status.is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Received HTTP response");

        Ok(HttpResponse::new(status.as_u16(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::DeviceListQuery;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("http://192.168.1.20");
        assert_eq!(config.base_url(), "http://192.168.1.20");
        assert!(config.credentials().is_none());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn http_config_trims_trailing_slashes() {
        let config = HttpConfig::new("http://nice.local//");
        assert_eq!(config.base_url(), "http://nice.local");
    }

    #[test]
    fn http_config_ignores_partial_credentials() {
        let config = HttpConfig::new("http://nice.local").with_credentials("admin", "");
        assert!(config.credentials().is_none());

        let config = HttpConfig::new("http://nice.local").with_credentials("", "secret");
        assert!(config.credentials().is_none());
    }

    #[test]
    fn http_config_with_timeout() {
        let config = HttpConfig::new("http://nice.local").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn http_config_rejects_missing_scheme() {
        let result = HttpConfig::new("192.168.1.20").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));

        let result = HttpConfig::new("ftp://192.168.1.20").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn http_config_into_client() {
        let client = HttpConfig::new("https://nice.local/")
            .with_credentials("user", "pass")
            .into_client()
            .unwrap();
        assert_eq!(client.base_url(), "https://nice.local");
        assert!(client.has_credentials());
        assert_eq!(
            DeviceListQuery.to_url(client.base_url()),
            "https://nice.local/cgi/devlst.xml"
        );
    }

    #[test]
    fn status_line() {
        assert_eq!(HttpResponse::new(200, String::new()).status_line(), "200 OK");
        assert_eq!(
            HttpResponse::new(299, String::new()).status_line(),
            "299 Unknown"
        );
    }

    #[test]
    fn login_page_markers() {
        assert!(looks_like_login_page("<HTML><body>Sign in</body></HTML>"));
        assert!(looks_like_login_page("<form><input name=\"password\"></form>"));
        assert!(looks_like_login_page("<!doctype html>"));
        assert!(!looks_like_login_page("<grplst><group num=\"1\"/></grplst>"));
    }
}
