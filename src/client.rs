//! The Weibo client and its request dispatcher.
//!
//! Every API call in this crate funnels through [`WeiboClient::get`],
//! [`WeiboClient::post`] or [`WeiboClient::upload`]: credential injection,
//! the network round trip, JSON decoding and rejection classification all
//! live here. The endpoint wrappers in [`crate::api`] are parameter
//! marshaling on top.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::auth::Credential;
use crate::error::{ApiError, WeiboError};
use crate::execution::http::{self, HttpResponse};
use crate::policy::{ExitPolicy, FailurePolicy};

/// Versioned root of the open API.
pub const DEFAULT_BASE_URL: &str = "https://api.weibo.com/2";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Request parameters: an order-irrelevant multimap, so repeated keys
/// (`url_short`) stay representable.
pub type Params = Vec<(String, String)>;

/// Which shape of call produced a response.
///
/// Only GET calls are idempotent polls, so only GET tolerates the
/// "no new data" rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallKind {
    Get,
    Post,
    Upload,
}

/// Client for the Sina Weibo open API.
///
/// One instance holds one access token; instances are cheap to clone and
/// safe to share across tasks. The only state shared between concurrent
/// calls is the injected [`FailurePolicy`].
#[derive(Clone)]
pub struct WeiboClient {
    http: reqwest::Client,
    credential: Credential,
    base_url: String,
    failure_policy: Arc<dyn FailurePolicy>,
}

/// Builder for [`WeiboClient`].
pub struct WeiboClientBuilder {
    access_token: Option<String>,
    base_url: String,
    timeout: Duration,
    http: Option<reqwest::Client>,
    failure_policy: Option<Arc<dyn FailurePolicy>>,
}

impl WeiboClientBuilder {
    fn new() -> Self {
        Self {
            access_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: None,
            failure_policy: None,
        }
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Override the API root, mainly for tests against a local server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Connection/read timeout for every request. Defaults to 30 s.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Supply a pre-built `reqwest::Client` (its own timeout settings win).
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// What to do with API rejections that are not the benign
    /// "no new data" poll answer. Defaults to [`ExitPolicy`].
    pub fn failure_policy(mut self, policy: Arc<dyn FailurePolicy>) -> Self {
        self.failure_policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<WeiboClient, WeiboError> {
        let token = self
            .access_token
            .ok_or_else(|| WeiboError::Config("access token is required".into()))?;
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| WeiboError::Config(e.to_string()))?,
        };
        Ok(WeiboClient {
            http,
            credential: Credential::new(token),
            base_url: self.base_url,
            failure_policy: self
                .failure_policy
                .unwrap_or_else(|| Arc::new(ExitPolicy::new())),
        })
    }
}

impl WeiboClient {
    pub fn builder() -> WeiboClientBuilder {
        WeiboClientBuilder::new()
    }

    /// Shorthand with default wiring (production escalation policy).
    pub fn new(access_token: impl Into<String>) -> Result<Self, WeiboError> {
        Self::builder().access_token(access_token).build()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET with query-string parameters.
    ///
    /// Returns `Ok(Some(decoded))` on success, `Ok(None)` when the API
    /// rejected the call (benign or escalated), `Err` on transport or
    /// decode failure.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        mut params: Params,
    ) -> Result<Option<T>, WeiboError> {
        self.credential.apply(&mut params);
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = http::get(&self.http, &url, &params).await?;
        self.finish(CallKind::Get, path, resp)
    }

    /// POST with a form-urlencoded body. Same result contract as [`get`],
    /// except no rejection code is tolerated.
    ///
    /// [`get`]: WeiboClient::get
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        mut params: Params,
    ) -> Result<Option<T>, WeiboError> {
        self.credential.apply(&mut params);
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let resp = http::post_form(&self.http, &url, &params).await?;
        self.finish(CallKind::Post, path, resp)
    }

    /// Multipart POST attaching `payload` as the file part `field_name`.
    ///
    /// `payload = None` still sends an empty file part under `file_name`;
    /// the upload endpoint requires the field to be present.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        mut params: Params,
        field_name: &str,
        file_name: &str,
        payload: Option<Bytes>,
    ) -> Result<Option<T>, WeiboError> {
        self.credential.apply(&mut params);
        let url = self.url(path);
        tracing::debug!(%url, "UPLOAD");
        let resp =
            http::post_multipart(&self.http, &url, &params, field_name, file_name, payload).await?;
        self.finish(CallKind::Upload, path, resp)
    }

    /// Decode the raw response and classify any rejection.
    fn finish<T: DeserializeOwned>(
        &self,
        kind: CallKind,
        path: &str,
        resp: HttpResponse,
    ) -> Result<Option<T>, WeiboError> {
        if resp.status == 200 {
            let v = serde_json::from_slice(&resp.body)
                .map_err(|e| WeiboError::Parse(e.to_string()))?;
            return Ok(Some(v));
        }

        let error: ApiError = serde_json::from_slice(&resp.body).map_err(|e| {
            WeiboError::Parse(format!(
                "error body for {path} (status {}): {e}",
                resp.status
            ))
        })?;

        if kind == CallKind::Get && error.is_no_new_data() {
            tracing::info!(path, "no new data since last poll");
            return Ok(None);
        }

        tracing::error!(path, status = resp.status, "Weibo API error: {error}");
        self.failure_policy.escalate(&error);
        Ok(None)
    }
}

impl std::fmt::Debug for WeiboClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeiboClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
