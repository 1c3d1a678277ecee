//! Harvesting the creator's video listing page.
//!
//! The listing page embeds its first screen of results as a JSON object
//! (`ytInitialData`) inside a script tag, alongside an API key and client
//! version for the `browse` endpoint that serves the remaining pages. Walking
//! the embedded grid and following continuation tokens yields the same set of
//! videos a browser reaches by scrolling, without driving a browser.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::videos::VideoEntry;

/// Harvest stops after this many videos even if continuations remain.
pub const DEFAULT_MAX_VIDEOS: usize = 800;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const INITIAL_DATA_MARKER: &str = "var ytInitialData = ";
const API_KEY_MARKER: &str = "\"INNERTUBE_API_KEY\":\"";
const CLIENT_VERSION_MARKER: &str = "\"INNERTUBE_CONTEXT_CLIENT_VERSION\":\"";

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("listing request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("listing page returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("listing page did not embed initial data")]
    MissingInitialData,

    #[error("embedded listing data was malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("listing URL was invalid: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Fetch the listing page and walk it (plus continuations) for video
/// entries, newest first, up to `max_videos`.
///
/// Entries the walk cannot make sense of are skipped with a warning; a page
/// without a grid at all yields an empty list rather than an error.
pub async fn fetch_channel_videos(
    client: &reqwest::Client,
    channel_url: &str,
    max_videos: usize,
) -> Result<Vec<VideoEntry>, ListingError> {
    let response = client
        .get(channel_url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ListingError::Status(response.status()));
    }

    let html = response.text().await?;
    let raw = extract_embedded_object(&html, INITIAL_DATA_MARKER)
        .ok_or(ListingError::MissingInitialData)?;
    let initial: Value = serde_json::from_str(raw)?;

    let mut entries = Vec::new();
    let mut continuation = grid_contents(&initial)
        .map(|items| collect_items(items, &mut entries))
        .unwrap_or_default();

    // Later pages come from the browse endpoint on the same host, keyed by
    // credentials scraped off the page.
    let api = InnertubeApi::from_page(channel_url, &html)?;

    while entries.len() < max_videos {
        let Some(token) = continuation.take() else {
            break;
        };
        let Some(api) = &api else {
            debug!("continuation token present but no API credentials on page");
            break;
        };

        let page = browse_continuation(client, api, &token).await?;
        continuation = continuation_contents(&page)
            .map(|items| collect_items(items, &mut entries))
            .unwrap_or_default();
    }

    entries.truncate(max_videos);
    Ok(entries)
}

/// API key and client version the page embeds for continuation requests.
struct InnertubeApi {
    endpoint: String,
    key: String,
    client_version: String,
}

impl InnertubeApi {
    fn from_page(channel_url: &str, html: &str) -> Result<Option<Self>, url::ParseError> {
        let Some(key) = extract_quoted(html, API_KEY_MARKER) else {
            return Ok(None);
        };
        let Some(client_version) = extract_quoted(html, CLIENT_VERSION_MARKER) else {
            return Ok(None);
        };

        let base = url::Url::parse(channel_url)?;
        let endpoint = base.join("/youtubei/v1/browse")?.to_string();

        Ok(Some(Self {
            endpoint,
            key: key.to_string(),
            client_version: client_version.to_string(),
        }))
    }
}

#[derive(Debug, Serialize)]
struct BrowseRequest<'a> {
    context: BrowseContext<'a>,
    continuation: &'a str,
}

#[derive(Debug, Serialize)]
struct BrowseContext<'a> {
    client: BrowseClient<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BrowseClient<'a> {
    client_name: &'a str,
    client_version: &'a str,
}

async fn browse_continuation(
    client: &reqwest::Client,
    api: &InnertubeApi,
    token: &str,
) -> Result<Value, ListingError> {
    let body = BrowseRequest {
        context: BrowseContext {
            client: BrowseClient {
                client_name: "WEB",
                client_version: &api.client_version,
            },
        },
        continuation: token,
    };

    let response = client
        .post(&api.endpoint)
        .query(&[("key", &api.key)])
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ListingError::Status(response.status()));
    }

    Ok(response.json().await?)
}

/// Append every video entry found in a grid page to `out`; return the
/// continuation token for the next page, if any.
fn collect_items(items: &[Value], out: &mut Vec<VideoEntry>) -> Option<String> {
    let mut continuation = None;
    for item in items {
        if let Some(renderer) = item
            .get("richItemRenderer")
            .and_then(|r| r.get("content"))
            .and_then(|c| c.get("videoRenderer"))
        {
            match video_entry(renderer) {
                Some(entry) => out.push(entry),
                None => warn!("skipping listing entry with missing fields"),
            }
        } else if let Some(token) = item
            .pointer("/continuationItemRenderer/continuationEndpoint/continuationCommand/token")
            .and_then(Value::as_str)
        {
            continuation = Some(token.to_string());
        }
    }
    continuation
}

fn video_entry(renderer: &Value) -> Option<VideoEntry> {
    let video_id = renderer.get("videoId").and_then(Value::as_str)?;
    let title = renderer
        .pointer("/title/runs/0/text")
        .and_then(Value::as_str)?;
    // The thumbnails array is ordered smallest to largest; take the largest.
    let thumbnail = renderer
        .pointer("/thumbnail/thumbnails")
        .and_then(Value::as_array)
        .and_then(|thumbs| thumbs.last())
        .and_then(|t| t.get("url"))
        .and_then(Value::as_str)?;

    Some(VideoEntry {
        title: title.to_string(),
        url: format!("https://www.youtube.com/watch?v={video_id}"),
        thumbnail: thumbnail.to_string(),
    })
}

/// The grid of the videos tab in the initial page data.
fn grid_contents(data: &Value) -> Option<&Vec<Value>> {
    let tabs = data
        .pointer("/contents/twoColumnBrowseResultsRenderer/tabs")?
        .as_array()?;
    tabs.iter().find_map(|tab| {
        tab.pointer("/tabRenderer/content/richGridRenderer/contents")
            .and_then(Value::as_array)
    })
}

/// The appended grid items in a browse continuation response.
fn continuation_contents(data: &Value) -> Option<&Vec<Value>> {
    let actions = data.get("onResponseReceivedActions")?.as_array()?;
    actions.iter().find_map(|action| {
        action
            .pointer("/appendContinuationItemsAction/continuationItems")
            .and_then(Value::as_array)
    })
}

/// Locate `marker` in the page and return the balanced JSON object that
/// follows it. Braces inside string literals (and escaped quotes inside
/// those) don't terminate the scan.
fn extract_embedded_object<'a>(html: &'a str, marker: &str) -> Option<&'a str> {
    let after = &html[html.find(marker)? + marker.len()..];
    let start = after.find('{')?;
    let bytes = after.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match byte {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&after[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Value of a `"MARKER":"value"` pair embedded in the page source.
fn extract_quoted<'a>(html: &'a str, marker: &str) -> Option<&'a str> {
    let after = &html[html.find(marker)? + marker.len()..];
    let end = after.find('"')?;
    Some(&after[..end])
}
