//! HTTP transport: exactly one round trip per call.
//!
//! Three request shapes exist on the open API: GET with a query string,
//! POST with a form-urlencoded body, and multipart POST for media upload.
//! All three return the raw status plus body bytes; decoding happens in
//! the dispatcher. There is no retry here and no streaming; connection,
//! DNS and timeout failures map to [`WeiboError::Http`].

use bytes::Bytes;

use crate::client::Params;
use crate::error::WeiboError;

/// Raw transport-level response.
#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

pub(crate) async fn get(
    client: &reqwest::Client,
    url: &str,
    params: &Params,
) -> Result<HttpResponse, WeiboError> {
    let rb = client.get(url).query(params);
    send(rb).await
}

pub(crate) async fn post_form(
    client: &reqwest::Client,
    url: &str,
    params: &Params,
) -> Result<HttpResponse, WeiboError> {
    let rb = client.post(url).form(params);
    send(rb).await
}

/// Multipart POST: every parameter becomes a text field, the payload a
/// named file part. A missing payload still produces the file part with
/// zero-length content; the API rejects requests where it is omitted.
pub(crate) async fn post_multipart(
    client: &reqwest::Client,
    url: &str,
    params: &Params,
    field_name: &str,
    file_name: &str,
    payload: Option<Bytes>,
) -> Result<HttpResponse, WeiboError> {
    let mut form = reqwest::multipart::Form::new();
    for (k, v) in params {
        form = form.text(k.clone(), v.clone());
    }
    let part = reqwest::multipart::Part::bytes(payload.unwrap_or_default().to_vec())
        .file_name(file_name.to_string());
    form = form.part(field_name.to_string(), part);

    let rb = client.post(url).multipart(form);
    send(rb).await
}

async fn send(rb: reqwest::RequestBuilder) -> Result<HttpResponse, WeiboError> {
    let resp = rb
        .send()
        .await
        .map_err(|e| WeiboError::Http(e.to_string()))?;
    let status = resp.status().as_u16();
    let body = resp
        .bytes()
        .await
        .map_err(|e| WeiboError::Http(e.to_string()))?
        .to_vec();
    Ok(HttpResponse { status, body })
}
