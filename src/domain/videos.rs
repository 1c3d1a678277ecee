use serde::{Deserialize, Serialize};

use crate::domain::color::Rgb;

/// A video as discovered on the creator's listing page, before any color
/// has been derived for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    pub title: String,
    pub url: String,
    pub thumbnail: String,
}

/// A harvested video with its derived accent color. One CSV cache row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub url: String,
    pub thumbnail: String,
    /// Lowercase `#rrggbb` accent color.
    pub color: String,
}

impl VideoRecord {
    pub fn new(entry: VideoEntry, color: Rgb) -> Self {
        Self {
            title: entry.title,
            url: entry.url,
            thumbnail: entry.thumbnail,
            color: color.to_hex(),
        }
    }
}

/// The JSON dataset shape consumed by the front-end: the cache row plus the
/// accent color decomposed into an `[r, g, b]` triple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoExport {
    #[serde(flatten)]
    pub record: VideoRecord,
    pub rgb: (u8, u8, u8),
}

impl From<VideoRecord> for VideoExport {
    fn from(record: VideoRecord) -> Self {
        let rgb = record
            .color
            .parse::<Rgb>()
            .map_or((0, 0, 0), |c| (c.r, c.g, c.b));
        Self { record, rgb }
    }
}

/// Truncate the query string (and fragment) from a thumbnail URL so that URL
/// variants served by caching proxies collapse to one canonical source.
pub fn canonical_thumbnail_url(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.set_fragment(None);
            parsed.into()
        }
        // Not an absolute URL; fall back to plain truncation.
        Err(_) => raw.split(['?', '#']).next().unwrap_or(raw).to_string(),
    }
}
