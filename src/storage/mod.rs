//! Local key/value store
//!
//! A SQLite-backed JSON store with an in-memory LRU in front, organized as:
//! - `keys`: the key layout (`pastResults_PL`, `favoriteTeam`, ...)
//! - `schema`: connection and table management
//! - `queries`: raw and typed get/put
//! - `models`: favourite team and league catalogue

pub mod keys;
pub mod models;
pub mod queries;
pub mod schema;


pub use keys::StoreKey;
pub use models::{fallback_leagues, FavoriteTeam, League};
pub use schema::LocalStore;
