pub mod export;
pub mod extract;
pub mod harvest;

use clap::{Parser, Subcommand};

use export::ExportCommand;
use extract::ExtractCommand;
use harvest::HarvestCommand;

#[derive(Debug, Parser)]
#[command(author, version, about = "Harvest video thumbnails and derive accent colors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Harvest the video listing and refresh the color cache and dataset
    Harvest(HarvestCommand),

    /// Derive the accent color of a single image (file path or URL)
    Extract(ExtractCommand),

    /// Regenerate the JSON dataset from the cache without touching the network
    Export(ExportCommand),
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
