//! Core utilities shared across the crate
//!
//! - `cache`: store location and the in-memory LRU tier
//! - `http`: request headers for the football-data API

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{default_store_path, MemoryCache};
pub use http::auth_header_map;
