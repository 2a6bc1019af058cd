//! Error types for the Weibo client.
//!
//! Failures returned to callers are collected in [`WeiboError`].
//! Application-level rejections from the open API keep their structured
//! payload in [`ApiError`]; they are classified by the dispatcher and
//! handed to the failure policy rather than returned as errors.

use serde::Deserialize;

/// Structured rejection returned by the Weibo open API on non-200 responses.
///
/// The wire shape is `{"Error": "...", "Error_Code": ..., "Request": "..."}`.
/// The service also emits the lowercase spellings on some endpoints, so both
/// are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Human-readable rejection message.
    #[serde(rename = "Error", alias = "error", default)]
    pub message: String,
    /// Numeric error code assigned by the service.
    #[serde(rename = "Error_Code", alias = "error_code", default)]
    pub code: i64,
    /// The request path/query echoed back by the service.
    #[serde(rename = "Request", alias = "request", default)]
    pub request: String,
}

impl ApiError {
    /// Code the service uses for "nothing new since the last poll".
    ///
    /// This is the only rejection a GET call treats as benign.
    pub const NO_NEW_DATA: i64 = 20101;

    /// Whether this rejection only means the polled resource is unchanged.
    pub fn is_no_new_data(&self) -> bool {
        self.code == Self::NO_NEW_DATA
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.code, self.message, self.request)
    }
}

/// All errors surfaced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum WeiboError {
    /// Network-level failure: connection, DNS, timeout, broken stream.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body was not the JSON we expected, on either the
    /// success or the error path.
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// Local file I/O failure (token / last-id storage).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid client configuration or stored credential material.
    #[error("configuration error: {0}")]
    Config(String),
}
