pub mod cache;
pub mod export;
pub mod listing;
pub mod thumbnails;
