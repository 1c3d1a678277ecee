use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::application::pipeline::export_dataset;

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// CSV cache of already-processed videos
    #[arg(long, env = "THUMBTONE_CACHE_PATH", default_value = "colors_videos.csv")]
    pub cache_path: PathBuf,

    /// JSON dataset consumed by the front-end
    #[arg(long, env = "THUMBTONE_OUTPUT_PATH", default_value = "videos.json")]
    pub output_path: PathBuf,
}

pub fn run(command: &ExportCommand) -> Result<()> {
    let count = export_dataset(&command.cache_path, &command.output_path)?;
    eprintln!(
        "Exported {count} videos to {}.",
        command.output_path.display()
    );
    Ok(())
}
