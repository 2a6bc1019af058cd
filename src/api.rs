//! Endpoint wrappers.
//!
//! One method per upstream endpoint, each a thin mapping from semantic
//! arguments to query keys on top of the dispatcher in
//! [`crate::client::WeiboClient`].

use bytes::Bytes;

use crate::client::{Params, WeiboClient};
use crate::error::WeiboError;
use crate::types::{Comment, MentionsPage, MidResponse, Post, Posts, UrlInfo, UrlInfos, User};

impl WeiboClient {
    /// `/statuses/user_timeline.json` — posts of one user since `since_id`.
    ///
    /// Identifies the user by `uid` when given, otherwise by
    /// `screen_name`. Returns an empty list when there is nothing new.
    pub async fn user_timeline(
        &self,
        uid: Option<i64>,
        screen_name: Option<&str>,
        since_id: i64,
        count: usize,
    ) -> Result<Vec<Post>, WeiboError> {
        let mut params: Params = Vec::new();
        if let Some(uid) = uid {
            params.push(("uid".into(), uid.to_string()));
        } else if let Some(name) = screen_name {
            params.push(("screen_name".into(), name.to_string()));
        }
        params.push(("since_id".into(), since_id.to_string()));
        params.push(("count".into(), count.to_string()));

        let posts: Option<Posts> = self.get("/statuses/user_timeline.json", params).await?;
        Ok(posts.map(|p| p.statuses).unwrap_or_default())
    }

    /// `/users/show.json` — a user's profile.
    pub async fn user_show(&self, uid: i64) -> Result<Option<User>, WeiboError> {
        let params: Params = vec![("uid".into(), uid.to_string())];
        self.get("/users/show.json", params).await
    }

    /// `/comments/create.json` — comment on a status.
    pub async fn create_comment(
        &self,
        id: i64,
        comment: &str,
    ) -> Result<Option<Comment>, WeiboError> {
        let params: Params = vec![
            ("id".into(), id.to_string()),
            ("comment".into(), comment.to_string()),
        ];
        self.post("/comments/create.json", params).await
    }

    /// `/statuses/show.json` — a single status by id.
    pub async fn status_show(&self, id: i64) -> Result<Option<Post>, WeiboError> {
        let params: Params = vec![("id".into(), id.to_string())];
        self.get("/statuses/show.json", params).await
    }

    /// `/statuses/repost.json` — repost a status with an annotation.
    pub async fn repost(&self, id: i64, status: &str) -> Result<Option<Post>, WeiboError> {
        let params: Params = vec![
            ("id".into(), id.to_string()),
            ("status".into(), status.to_string()),
            ("is_comment".into(), "0".into()),
        ];
        self.post("/statuses/repost.json", params).await
    }

    /// `/statuses/upload.json` — post a status with an attached picture.
    ///
    /// `payload = None` still sends the `pic` file part, empty.
    pub async fn upload_status(
        &self,
        status: &str,
        payload: Option<Bytes>,
    ) -> Result<Option<Post>, WeiboError> {
        let params: Params = vec![("status".into(), status.to_string())];
        self.upload("/statuses/upload.json", params, "pic", "pic.jpg", payload)
            .await
    }

    /// `/statuses/mentions.json` — statuses mentioning the current user.
    pub async fn mentions(&self) -> Result<Option<MentionsPage>, WeiboError> {
        self.get("/statuses/mentions.json", Vec::new()).await
    }

    /// `/short_url/info.json` — resolve one or more `t.cn` short URLs.
    pub async fn short_url_info(&self, urls: &[String]) -> Result<Vec<UrlInfo>, WeiboError> {
        let params: Params = urls
            .iter()
            .map(|u| ("url_short".to_string(), u.clone()))
            .collect();
        let infos: Option<UrlInfos> = self.get("/short_url/info.json", params).await?;
        Ok(infos.map(|i| i.urls).unwrap_or_default())
    }

    /// `/statuses/querymid.json` — look up the mid string for an id.
    ///
    /// `kind` is the object type the id refers to (1 = status,
    /// 2 = comment, 3 = direct message).
    pub async fn query_mid(&self, id: i64, kind: i64) -> Result<Option<String>, WeiboError> {
        let params: Params = vec![
            ("id".into(), id.to_string()),
            ("type".into(), kind.to_string()),
        ];
        let mid: Option<MidResponse> = self.get("/statuses/querymid.json", params).await?;
        Ok(mid.map(|m| m.mid))
    }
}
