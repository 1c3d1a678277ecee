//! thumbtone harvests a creator's video listing, derives a representative
//! accent color from each thumbnail's border pixels, and maintains a CSV
//! cache plus a JSON dataset for a separate front-end.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
