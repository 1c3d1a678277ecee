//! Batch orchestration: harvest the listing, derive colors for videos not
//! yet in the cache, rewrite the cache and emit the JSON dataset.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::videos::VideoRecord;
use crate::infrastructure::{cache, export, listing, thumbnails};

#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub channel_url: String,
    pub cache_path: PathBuf,
    pub output_path: PathBuf,
    pub max_videos: usize,
}

/// Counts reported after a harvest run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HarvestOutcome {
    /// Records written to the cache and dataset.
    pub total: usize,
    /// Videos reused from the cache without refetching.
    pub reused: usize,
    /// Videos whose thumbnail was fetched and processed this run.
    pub extracted: usize,
    /// Videos dropped because their thumbnail could not be fetched or decoded.
    pub skipped: usize,
}

/// Run the full batch: one listing pass, one thumbnail fetch per new video,
/// then rewrite both outputs.
///
/// Videos are processed sequentially and independently; a failure on one is
/// logged and skipped, never fatal to the run.
pub async fn harvest(client: &reqwest::Client, config: &HarvestConfig) -> Result<HarvestOutcome> {
    let cached = cache::load(&config.cache_path)
        .with_context(|| format!("loading cache from {}", config.cache_path.display()))?;
    let cached_by_url: HashMap<&str, &VideoRecord> =
        cached.iter().map(|r| (r.url.as_str(), r)).collect();
    info!(cached = cached.len(), "loaded harvest cache");

    let entries = listing::fetch_channel_videos(client, &config.channel_url, config.max_videos)
        .await
        .context("harvesting video listing")?;
    info!(videos = entries.len(), "harvested listing");

    let mut records = Vec::with_capacity(entries.len());
    let mut outcome = HarvestOutcome {
        total: 0,
        reused: 0,
        extracted: 0,
        skipped: 0,
    };

    for entry in entries {
        if let Some(&record) = cached_by_url.get(entry.url.as_str()) {
            records.push(record.clone());
            outcome.reused += 1;
            continue;
        }

        info!(title = %entry.title, "new video found");
        match thumbnails::fetch_accent_color(client, &entry.thumbnail).await {
            Some(color) => {
                records.push(VideoRecord::new(entry, color));
                outcome.extracted += 1;
            }
            None => {
                // Color unknown: leave the video out rather than abort.
                warn!(title = %entry.title, "skipping video without accent color");
                outcome.skipped += 1;
            }
        }
    }

    outcome.total = records.len();

    cache::store(&config.cache_path, &records)
        .with_context(|| format!("writing cache to {}", config.cache_path.display()))?;
    export::write_dataset(&config.output_path, &records)
        .with_context(|| format!("writing dataset to {}", config.output_path.display()))?;

    info!(
        total = outcome.total,
        reused = outcome.reused,
        extracted = outcome.extracted,
        skipped = outcome.skipped,
        "harvest complete"
    );
    Ok(outcome)
}

/// Regenerate the JSON dataset from the existing cache, with no network use.
pub fn export_dataset(cache_path: &Path, output_path: &Path) -> Result<usize> {
    let records = cache::load(cache_path)
        .with_context(|| format!("loading cache from {}", cache_path.display()))?;
    export::write_dataset(output_path, &records)
        .with_context(|| format!("writing dataset to {}", output_path.display()))?;
    Ok(records.len())
}
