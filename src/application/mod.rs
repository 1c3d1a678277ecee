pub mod pipeline;

pub use pipeline::{HarvestConfig, HarvestOutcome, export_dataset, harvest};
