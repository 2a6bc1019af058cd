//! Small helpers around the API proper.

use reqwest::redirect;

/// Expand shortened URLs by probing each one without following redirects
/// and collecting the `Location` target.
///
/// Best effort: URLs that fail to resolve or do not redirect are skipped,
/// never an error.
pub async fn expand_urls(urls: &[String]) -> Vec<String> {
    let client = match reqwest::Client::builder()
        .redirect(redirect::Policy::none())
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("could not build redirect probe client: {e}");
            return Vec::new();
        }
    };

    let mut expanded = Vec::new();
    for url in urls {
        let resp = match client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!(%url, "redirect probe failed: {e}");
                continue;
            }
        };
        if let Some(location) = resp.headers().get(reqwest::header::LOCATION) {
            if let Ok(target) = location.to_str() {
                expanded.push(target.to_string());
            }
        }
    }
    expanded
}
