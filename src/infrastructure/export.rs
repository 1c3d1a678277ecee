use std::path::Path;

use thiserror::Error;

use crate::domain::videos::{VideoExport, VideoRecord};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("export serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the JSON dataset consumed by the front-end: a pretty-printed array
/// of records with the accent color decomposed into an `[r, g, b]` triple.
pub fn write_dataset(path: &Path, records: &[VideoRecord]) -> Result<(), ExportError> {
    let exports: Vec<VideoExport> = records.iter().cloned().map(VideoExport::from).collect();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&exports)?;
    std::fs::write(path, json)?;
    Ok(())
}
