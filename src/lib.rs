//! Client library for the Sina Weibo open API.
//!
//! Covers status posting, timeline polling, comments, mentions, media
//! upload and short-URL resolution. Every call goes through one dispatcher
//! ([`WeiboClient`]) that injects the access token, performs a single HTTP
//! round trip, decodes the JSON response into a typed result and
//! classifies rejections.
//!
//! Built for polling daemons: the one benign rejection is the service's
//! "no new data since the last poll" answer on GET calls, surfaced as an
//! absent result. Every other rejection is handed to the injected
//! [`FailurePolicy`]; the production default logs it and terminates the
//! process, exactly once, no matter how many concurrent calls fail.
//!
//! ```rust,ignore
//! use weibo::WeiboClient;
//!
//! let token = weibo::storage::read_token("weibo_token")?;
//! let client = WeiboClient::new(token)?;
//! let since_id = weibo::storage::read_last_id("last_id")?;
//! let posts = client.user_timeline(Some(1642909335), None, since_id, 20).await?;
//! if let Some(latest) = posts.first() {
//!     weibo::storage::write_last_id("last_id", latest.id)?;
//! }
//! ```
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
mod execution;
pub mod policy;
pub mod storage;
pub mod types;
pub mod utils;

pub use auth::Credential;
pub use client::{Params, WeiboClient, WeiboClientBuilder, DEFAULT_BASE_URL};
pub use error::{ApiError, WeiboError};
pub use policy::{ExitPolicy, FailurePolicy, OnceLatch};
