use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::print_json;
use crate::domain::extract_accent;
use crate::infrastructure::thumbnails;

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Image to analyze: a local file path or an http(s) URL
    pub source: String,
}

#[derive(Debug, Serialize)]
struct ExtractOutput {
    source: String,
    color: String,
    rgb: (u8, u8, u8),
}

/// One-off extraction for tuning and debugging the heuristic.
pub async fn run(client: &reqwest::Client, command: ExtractCommand) -> Result<()> {
    let bytes = if command.source.starts_with("http://") || command.source.starts_with("https://")
    {
        thumbnails::download(client, &command.source)
            .await
            .with_context(|| format!("downloading {}", command.source))?
    } else {
        std::fs::read(&command.source)
            .with_context(|| format!("reading {}", command.source))?
    };

    let color = extract_accent(&bytes)
        .with_context(|| format!("extracting accent color from {}", command.source))?;

    print_json(&ExtractOutput {
        source: command.source,
        color: color.to_hex(),
        rgb: (color.r, color.g, color.b),
    })
}
