pub mod accent;
pub mod color;
pub mod errors;
pub mod videos;

// Re-exports
pub use accent::extract_accent;
pub use color::{Hsv, Rgb};
pub use errors::ExtractionError;
pub use videos::{VideoEntry, VideoExport, VideoRecord};
