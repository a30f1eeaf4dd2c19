//! ERP session client
//!
//! Holds the bearer-token lifecycle for the ERP gateway and issues the HTTP
//! verbs against it. One session instance is constructed by the caller and
//! shared (`Arc`) by every engine; token state is injected, never a
//! process-wide singleton.
//!
//! Re-authentication is an explicit pre-call hook inside every verb: each
//! request first passes through [`ErpSession::bearer`], which refreshes the
//! token when fewer than five minutes remain before expiry. The token state
//! sits behind an async mutex, so concurrent callers that observe an
//! expired token converge on a single in-flight refresh. Whoever acquires
//! the lock first refreshes; the rest re-check and reuse the fresh token.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use plantops_domain::ErpConfig;
use reqwest::{header, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::http::HttpClient;

use super::errors::ErpError;

/// Tokens within this window of expiry are treated as already expired.
const EXPIRY_MARGIN_SECS: i64 = 5 * 60;
/// Lifetime assumed when the token endpoint omits `expires_in`.
const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

/// Authenticated client for the ERP's OData gateway.
pub struct ErpSession {
    http: HttpClient,
    config: ErpConfig,
    state: Mutex<TokenState>,
}

#[derive(Default)]
struct TokenState {
    token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl TokenState {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match (&self.token, self.expires_at) {
            (Some(_), Some(expires_at)) => {
                expires_at - now < ChronoDuration::seconds(EXPIRY_MARGIN_SECS)
            }
            _ => true,
        }
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    username: &'a str,
    password: &'a str,
    grant_type: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<i64>,
}

impl ErpSession {
    /// Create a session for the given ERP configuration.
    ///
    /// # Errors
    /// Returns `ErpError::Config` if the HTTP client cannot be built.
    pub fn new(config: ErpConfig) -> Result<Self, ErpError> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ErpError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config, state: Mutex::new(TokenState::default()) })
    }

    /// Exchange the configured credentials for a fresh bearer token.
    ///
    /// # Errors
    /// Returns `ErpError::Auth` when the exchange fails or the response
    /// lacks a token field; the underlying transport error is wrapped, not
    /// swallowed.
    pub async fn authenticate(&self) -> Result<(), ErpError> {
        let mut state = self.state.lock().await;
        self.refresh_locked(&mut state).await
    }

    /// Issue a GET against the gateway, optionally with query parameters.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&[(&str, &str)]>,
    ) -> Result<T, ErpError> {
        let mut builder = self.http.request(Method::GET, self.entity_url(path));
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.execute(path, builder).await
    }

    /// Issue a POST with a JSON body against the gateway.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ErpError> {
        let builder = self.http.request(Method::POST, self.entity_url(path)).json(body);
        self.execute(path, builder).await
    }

    /// Issue a PUT with a JSON body against the gateway.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ErpError> {
        let builder = self.http.request(Method::PUT, self.entity_url(path)).json(body);
        self.execute(path, builder).await
    }

    /// Issue a DELETE against the gateway.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ErpError> {
        let builder = self.http.request(Method::DELETE, self.entity_url(path));
        self.execute(path, builder).await
    }

    fn entity_url(&self, path: &str) -> String {
        format!("{}{}{}", self.config.base_url, self.config.gateway_prefix, path)
    }

    /// Pre-call hook: return a valid bearer token, refreshing first when
    /// none is held or fewer than five minutes remain. A failed refresh
    /// aborts the outbound call; no unauthenticated request is ever sent.
    async fn bearer(&self) -> Result<String, ErpError> {
        let mut state = self.state.lock().await;
        if state.is_expired(Utc::now()) {
            self.refresh_locked(&mut state).await?;
        }
        state
            .token
            .clone()
            .ok_or_else(|| ErpError::Auth("no token held after refresh".to_string()))
    }

    async fn refresh_locked(&self, state: &mut TokenState) -> Result<(), ErpError> {
        let url = format!("{}/auth/token", self.config.base_url);
        let request = TokenRequest {
            client_id: &self.config.client_id,
            username: &self.config.username,
            password: &self.config.password,
            grant_type: "password",
        };

        let builder = self.http.request(Method::POST, &url).json(&request);
        let response = self
            .http
            .send(builder)
            .await
            .map_err(|e| ErpError::Auth(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ErpError::Auth(format!("token endpoint returned HTTP {status}")));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ErpError::Auth(format!("malformed token response: {e}")))?;

        let token = body
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ErpError::Auth("token response missing access_token".to_string()))?;

        let expires_in = body.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
        state.token = Some(token);
        state.expires_at = Some(Utc::now() + ChronoDuration::seconds(expires_in));
        debug!(expires_in, "ERP authentication succeeded");
        Ok(())
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, ErpError> {
        let token = self.bearer().await?;
        let builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));

        let response = self.http.send(builder).await.map_err(|e| ErpError::Request {
            path: path.to_string(),
            status: None,
            message: e.to_string(),
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ErpError::NotFound { path: path.to_string() });
        }
        if !status.is_success() {
            let message =
                response.text().await.unwrap_or_else(|_| "unreadable error body".to_string());
            warn!(path, status = status.as_u16(), "ERP request failed");
            return Err(ErpError::Request {
                path: path.to_string(),
                status: Some(status.as_u16()),
                message,
            });
        }

        // Some gateway verbs (PUT in particular) answer with an empty body.
        let text = response.text().await.map_err(|e| ErpError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let payload = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(payload).map_err(|e| ErpError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
