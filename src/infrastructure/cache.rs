use std::path::Path;

use thiserror::Error;

use crate::domain::videos::VideoRecord;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache row was malformed: {0}")]
    Csv(#[from] csv::Error),
}

/// Load previously harvested records from the CSV cache.
///
/// A missing file is an empty cache, not an error: the first run starts
/// from nothing.
pub fn load(path: &Path) -> Result<Vec<VideoRecord>, CacheError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Rewrite the cache wholesale with the given records, in order, with a
/// `title,url,thumbnail,color` header row.
pub fn store(path: &Path, records: &[VideoRecord]) -> Result<(), CacheError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
