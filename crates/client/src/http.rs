//! Authenticated request helper.
//!
//! [`ConsoleClient`] owns the HTTP connection pool, the service base URL,
//! and the [`Session`]. Resource handles borrow it for every call. The
//! helper does exactly one thing per call: serialize, attach the bearer
//! token when one is present, send, and translate the response. There is
//! no retry, no cache, and no deduplication of identical calls.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;

use crate::config::ConsoleConfig;
use crate::error::ApiError;
use crate::resources::{AdminsApi, FeesApi, KycApi, RolesApi};
use crate::session::{MemorySessionStore, Session, SessionStore};

/// Client for the iSmartPay admin REST service.
///
/// Cheap to clone; all clones share the connection pool and session.
#[derive(Clone)]
pub struct ConsoleClient {
    inner: Arc<ConsoleClientInner>,
}

struct ConsoleClientInner {
    http: reqwest::Client,
    api_base: String,
    session: Session,
}

impl ConsoleClient {
    /// Create a client with an in-memory session store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ConsoleConfig) -> Result<Self, ApiError> {
        Self::with_store(config, Arc::new(MemorySessionStore::default()))
    }

    /// Create a client with an injected session store.
    ///
    /// Any session state the store already holds (token, last view) is
    /// restored into the live session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_store(
        config: &ConsoleConfig,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ConsoleClientInner {
                http,
                api_base: config.api_base(),
                session: Session::restore(store),
            }),
        })
    }

    /// The shared session handle.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Handle for the admins resource.
    #[must_use]
    pub fn admins(&self) -> AdminsApi {
        AdminsApi::new(self.clone())
    }

    /// Handle for the roles resource.
    #[must_use]
    pub fn roles(&self) -> RolesApi {
        RolesApi::new(self.clone())
    }

    /// Handle for the fees resource.
    #[must_use]
    pub fn fees(&self) -> FeesApi {
        FeesApi::new(self.clone())
    }

    /// Handle for the KYC applications resource.
    #[must_use]
    pub fn kyc(&self) -> KycApi {
        KycApi::new(self.clone())
    }

    /// Execute a GET request.
    pub(crate) async fn get_json(&self, path: &str, op: &str) -> Result<Value, ApiError> {
        let request = self.inner.http.get(self.endpoint(path));
        self.execute(request, op).await
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        op: &str,
    ) -> Result<Value, ApiError> {
        let request = self.inner.http.post(self.endpoint(path)).json(body);
        self.execute(request, op).await
    }

    /// Execute a PUT request with a JSON body.
    pub(crate) async fn put_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        op: &str,
    ) -> Result<Value, ApiError> {
        let request = self.inner.http.put(self.endpoint(path)).json(body);
        self.execute(request, op).await
    }

    /// Execute a DELETE request.
    pub(crate) async fn delete_json(&self, path: &str, op: &str) -> Result<Value, ApiError> {
        let request = self.inner.http.delete(self.endpoint(path));
        self.execute(request, op).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.api_base)
    }

    /// Attach the bearer token when present, send under the session's
    /// cancellation token, and translate the response.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        op: &str,
    ) -> Result<Value, ApiError> {
        let request = match self.inner.session.bearer() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        };

        let cancel = self.inner.session.cancel_token();
        let response = tokio::select! {
            () = cancel.cancelled() => return Err(ApiError::Cancelled),
            result = request.send() => result?,
        };

        self.handle_response(response, op).await
    }

    /// Handle the response: 2xx decodes as JSON (empty bodies decode as
    /// null), anything else becomes an `Api` error with the best message
    /// the body offers.
    async fn handle_response(
        &self,
        response: reqwest::Response,
        op: &str,
    ) -> Result<Value, ApiError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&body)
                .map_err(|e| ApiError::Parse(format!("{op}: failed to decode response: {e}")));
        }

        let message = match response.text().await {
            Ok(body) => extract_error_message(&body),
            Err(_) => None,
        };

        Err(ApiError::Api {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| format!("{op} failed")),
        })
    }
}

impl std::fmt::Debug for ConsoleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleClient")
            .field("api_base", &self.inner.api_base)
            .field("session", &self.inner.session)
            .finish_non_exhaustive()
    }
}

/// Probe an error response body for a human-readable message: `message`
/// first, then `error` when it is a string.
fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| value.get("error").and_then(Value::as_str))
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}
