use thiserror::Error;

/// Failures while deriving an accent color from thumbnail bytes.
///
/// All variants are recoverable at per-thumbnail granularity: callers log
/// and skip the affected video rather than aborting the batch.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image data was empty")]
    EmptyInput,
}
