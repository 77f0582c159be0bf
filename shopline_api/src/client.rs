//! HTTP client for the Shopline Open API.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::query::{Query, QueryBuilder};
use crate::Error;

/// Base URL of the token-scoped Open API.
pub const OPEN_API_BASE_URL: &str = "https://open.shopline.io/v1";

const USER_AGENT: &str = concat!("shopline-rs/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Shopline Open API.
///
/// Holds only the base URL and access token, so it is cheap to share by
/// reference across tasks. Each request builds a fresh `reqwest::Client`
/// with a 30-second timeout. Resource-specific methods live in
/// [`crate::endpoints`]; the generic helpers here cover everything else.
#[derive(Clone)]
pub struct Client {
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
    access_token: String,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Error body shape returned on 4xx responses.
#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl Client {
    /// Creates a new client pointing at the production Open API.
    pub fn new(access_token: &str) -> Self {
        Self::with_base_url(OPEN_API_BASE_URL, access_token)
    }

    /// Creates a new client with a custom base URL. Used for the per-store
    /// admin domain and for testing with wiremock.
    pub fn with_base_url(base_url: &str, access_token: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: Option<&QueryBuilder>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    /// Sends one request and returns the body of a 2xx response.
    async fn send<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<String, Error>
    where
        B: Serialize + ?Sized,
    {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;

        tracing::debug!(%method, %url, "api request");
        let mut req = client
            .request(method.clone(), url.clone())
            .bearer_auth(&self.access_token)
            .header("x-shopline-access-token", &self.access_token)
            .header("accept", "application/json")
            .header("content-type", "application/json");
        if let Some(body) = body {
            let payload = serde_json::to_vec(body)?;
            req = req.body(payload);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to send {} {}: {}", method, url, e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let retry_after = resp
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .map(parse_retry_after);
        let text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;
        tracing::debug!(%method, %url, status = status.as_u16(), "api response");

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = retry_after.unwrap_or(Duration::from_secs(1));
            tracing::warn!("Rate limited on {} {}, retry after {:?}", method, url, retry_after);
            return Err(Error::RateLimited { retry_after });
        }
        if !status.is_success() {
            let err = api_error(status, &text);
            tracing::error!("Request failed with status {}: {}", status, truncate_body(&text));
            return Err(err);
        }
        Ok(text)
    }

    async fn request<T, B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self.send(method, url, body).await?;
        parse_body(&text)
    }

    /// `GET path` and decode the JSON response.
    pub async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, None)?;
        self.request::<T, ()>(Method::GET, url, None).await
    }

    /// `GET path?query` and decode the JSON response.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, Some(&query.to_builder()))?;
        self.request::<T, ()>(Method::GET, url, None).await
    }

    /// `POST path` with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path, None)?;
        self.request(Method::POST, url, Some(body)).await
    }

    /// `PUT path` with a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path, None)?;
        self.request(Method::PUT, url, Some(body)).await
    }

    /// `PATCH path`, with an optional JSON body.
    pub async fn patch<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path, None)?;
        self.request(Method::PATCH, url, body).await
    }

    /// `DELETE path`. Any response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.get_url(path, None)?;
        self.send::<()>(Method::DELETE, url, None).await?;
        Ok(())
    }
}

/// Decodes a success body. An empty body decodes as JSON `null`, which
/// suits `()` and `Option<_>` targets.
fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    let body = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str::<T>(body).map_err(|e| {
        tracing::error!(
            "Failed to parse resource: {} | body: {}",
            e,
            truncate_body(text)
        );
        Error::Decode(e)
    })
}

/// Maps a non-success response to [`Error::Api`].
fn api_error(status: StatusCode, body: &str) -> Error {
    if status.is_client_error() {
        if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
            if !parsed.code.is_empty() || !parsed.message.is_empty() {
                return Error::Api {
                    status: status.as_u16(),
                    code: parsed.code,
                    message: parsed.message,
                };
            }
        }
    }
    let mut message = status.canonical_reason().unwrap_or("Unknown").to_string();
    let trimmed = body.trim();
    if !trimmed.is_empty() && !trimmed.contains("<html") && !trimmed.contains("<HTML") {
        message.push_str(": ");
        message.push_str(&snippet(trimmed, 200));
    }
    Error::Api {
        status: status.as_u16(),
        code: format!("HTTP_{}", status.as_u16()),
        message,
    }
}

/// `Retry-After` as whole seconds or an HTTP date; anything else falls back
/// to one second.
fn parse_retry_after(header: &str) -> Duration {
    retry_after_from(header, Utc::now())
}

/// A date in the past waits zero seconds.
fn retry_after_from(header: &str, now: DateTime<Utc>) -> Duration {
    let header = header.trim();
    if let Ok(secs) = header.parse::<u64>() {
        return Duration::from_secs(secs);
    }
    match DateTime::parse_from_rfc2822(header) {
        Ok(at) => (at.with_timezone(&Utc) - now)
            .to_std()
            .unwrap_or(Duration::ZERO),
        Err(_) => Duration::from_secs(1),
    }
}

fn snippet(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        body.to_string()
    } else {
        let cut: String = body.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

/// Rejects blank ids before any request is made.
pub(crate) fn require(value: &str, what: &'static str) -> Result<(), Error> {
    if value.trim().is_empty() {
        Err(Error::MissingArgument(what))
    } else {
        Ok(())
    }
}
