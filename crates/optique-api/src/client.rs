//! HTTP plumbing shared by every resource module.

use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Result};

/// Client for the backend REST API.
///
/// Holds one connection-pooling `reqwest::Client`, the API base URL and the
/// bearer token installed after login. The token lives behind a `Mutex` so
/// the client can be shared (`Arc<ApiClient>`) between pages while the auth
/// context logs in or out.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Mutex<Option<String>>,
}

impl ApiClient {
    /// Create a client for the API at `base_url` (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: Mutex::new(None),
        }
    }

    /// Install the bearer token attached to every subsequent request.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.lock_token() = Some(token.into());
    }

    /// Drop the bearer token (logout).
    pub fn clear_token(&self) {
        *self.lock_token() = None;
    }

    /// Whether a bearer token is currently installed.
    pub fn has_token(&self) -> bool {
        self.lock_token().is_some()
    }

    fn lock_token(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // The guarded value is a plain Option<String>; a poisoned lock
        // cannot leave it in a torn state, so recover instead of failing.
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.lock_token().as_deref() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let mut req = self.http.get(self.url(path));
        if !query.is_empty() {
            req = req.query(query);
        }
        Self::read_json(self.authorize(req).send().await?).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let req = self.authorize(self.http.post(self.url(path)).json(body));
        Self::read_json(req.send().await?).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let req = self.authorize(self.http.put(self.url(path)).json(body));
        Self::read_json(req.send().await?).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let req = self.authorize(self.http.delete(self.url(path)));
        let resp = req.send().await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::backend_error(resp).await)
        }
    }

    /// Decode a success body, or turn a non-2xx response into
    /// [`ApiError::Backend`].
    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        if !resp.status().is_success() {
            return Err(Self::backend_error(resp).await);
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn backend_error(resp: reqwest::Response) -> ApiError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let detail = extract_detail(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
        tracing::debug!(status = status.as_u16(), %detail, "backend error");
        ApiError::Backend {
            status: status.as_u16(),
            detail,
        }
    }
}

/// Pull the `detail` field out of a backend error body, when present.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}
