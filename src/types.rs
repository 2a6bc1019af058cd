//! Typed payloads for the Weibo open API.
//!
//! Decoding is tolerant: every field defaults when absent, since the API
//! routinely omits fields depending on endpoint and account permissions.

use serde::Deserialize;

/// A single status (post) on the timeline.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Post {
    pub created_at: String,
    pub id: i64,
    pub mid: String,
    pub text: String,
    pub source: String,
    pub truncated: bool,
    pub in_reply_to_status_id: String,
    pub in_reply_to_screen_name: String,
    pub thumbnail_pic: String,
    pub bmiddle_pic: String,
    pub original_pic: String,
    pub user: Option<User>,
    pub retweeted_status: Option<Box<Post>>,
    pub reposts_count: i64,
    pub comments_count: i64,
    pub attitudes_count: i64,
}

/// List wrapper returned by timeline endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Posts {
    pub statuses: Vec<Post>,
}

/// A user profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub screen_name: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub profile_image_url: String,
    pub verified_reason: String,
}

/// A comment on a status.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub source: String,
    pub mid: String,
    pub user: Option<User>,
    pub status: Option<Post>,
}

/// Page of statuses mentioning the authenticated user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MentionsPage {
    pub statuses: Vec<Post>,
    pub hasvisible: bool,
    pub previous_cursor: i64,
    pub next_cursor: i64,
    pub total_number: i64,
    pub interval: i64,
}

/// Resolution record for one shortened URL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UrlInfo {
    pub url_short: String,
    pub url_long: String,
    pub title: String,
    pub description: String,
}

/// List wrapper for `/short_url/info.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UrlInfos {
    pub urls: Vec<UrlInfo>,
}

/// Scalar wrapper for `/statuses/querymid.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MidResponse {
    pub mid: String,
}
