//! Type-safe wrappers for football-data identifiers.

pub mod ids;
pub mod resource;

pub use ids::LeagueId;
pub use resource::ResourceType;
