use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::print_json;
use crate::application::pipeline::{HarvestConfig, harvest};
use crate::infrastructure::listing::DEFAULT_MAX_VIDEOS;

#[derive(Debug, Args)]
pub struct HarvestCommand {
    /// Video listing page of the creator to harvest
    #[arg(
        long,
        env = "THUMBTONE_CHANNEL_URL",
        default_value = "https://www.youtube.com/@COLORSxSTUDIOS/videos"
    )]
    pub channel_url: String,

    /// CSV cache of already-processed videos
    #[arg(long, env = "THUMBTONE_CACHE_PATH", default_value = "colors_videos.csv")]
    pub cache_path: PathBuf,

    /// JSON dataset consumed by the front-end
    #[arg(long, env = "THUMBTONE_OUTPUT_PATH", default_value = "videos.json")]
    pub output_path: PathBuf,

    /// Stop harvesting after this many videos
    #[arg(long, env = "THUMBTONE_MAX_VIDEOS", default_value_t = DEFAULT_MAX_VIDEOS)]
    pub max_videos: usize,
}

pub async fn run(client: &reqwest::Client, command: HarvestCommand) -> Result<()> {
    let config = HarvestConfig {
        channel_url: command.channel_url,
        cache_path: command.cache_path,
        output_path: command.output_path,
        max_videos: command.max_videos,
    };

    let outcome = harvest(client, &config).await?;
    print_json(&outcome)
}
