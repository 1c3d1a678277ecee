use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::domain::color::Rgb;
use crate::domain::extract_accent;
use crate::domain::videos::canonical_thumbnail_url;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("thumbnail request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("thumbnail download returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("thumbnail URL returned content type {0:?}, not an image")]
    NotAnImage(String),

    #[error("thumbnail download returned an empty body")]
    EmptyBody,
}

/// Download a thumbnail's raw bytes with a bounded timeout.
///
/// The URL is canonicalized (query string truncated) before the request so
/// that caching-proxy variants collapse to one source.
pub async fn download(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let canonical = canonical_thumbnail_url(url);

    let response = client
        .get(&canonical)
        .timeout(DOWNLOAD_TIMEOUT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.starts_with("image/") {
        return Err(FetchError::NotAnImage(content_type));
    }

    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    Ok(bytes.to_vec())
}

/// Download a thumbnail and derive its accent color.
///
/// Returns `None` on any fetch or decode failure so one bad thumbnail never
/// aborts the batch; failures are logged and the caller skips the video.
pub async fn fetch_accent_color(client: &reqwest::Client, url: &str) -> Option<Rgb> {
    let bytes = match download(client, url).await {
        Ok(b) => b,
        Err(err) => {
            warn!(url, error = %err, "failed to download thumbnail");
            return None;
        }
    };

    let url_owned = url.to_string();
    match tokio::task::spawn_blocking(move || extract_accent(&bytes)).await {
        Ok(Ok(color)) => Some(color),
        Ok(Err(err)) => {
            warn!(url = url_owned, error = %err, "failed to extract accent color");
            None
        }
        Err(err) => {
            warn!(url = url_owned, error = %err, "accent extraction task panicked");
            None
        }
    }
}
