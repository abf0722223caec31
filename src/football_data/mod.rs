//! football-data.org v4 API: client, response types and extraction.

pub mod extract;
pub mod http;
pub mod types;

pub use http::{FootballDataClient, FOOTBALL_DATA_BASE_URL};
pub use types::{Match, MatchStatus, StandingRow, Team};
