//! Matchday Library
//!
//! Follow one favourite football team: recent result, next fixture and league
//! position, served from a local cache that a background worker keeps fresh
//! from the football-data.org v4 API.
//!
//! ## Features
//!
//! - **Fetch-and-Cache Worker**: refreshes a league's past results, upcoming
//!   fixtures and table concurrently, writing an empty list on any failure
//! - **Local Store**: SQLite key/value store with an in-memory LRU in front
//! - **Message Router**: `fetchTeams` / `updateLeague` requests with async replies
//! - **Scheduler**: refresh on install/update and on a fixed interval
//! - **Popup**: derived previous/next/position view rendered as text or JSON
//! - **Proxy**: HTTP pass-through that keeps the API key server-side
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use matchday::{football_data::FootballDataClient, storage::LocalStore, worker::FetchWorker, LeagueId};
//! use std::sync::Arc;
//!
//! # async fn example() -> matchday::Result<()> {
//! let client = FootballDataClient::new(matchday::football_data::FOOTBALL_DATA_BASE_URL, Some("token"))?;
//! let worker = FetchWorker::new(client, Arc::new(LocalStore::new()?));
//!
//! let report = worker.refresh_league(&LeagueId::new("PL")?).await;
//! assert_eq!(report.outcomes.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FOOTBALL_DATA_API_KEY=your-token
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod football_data;
pub mod presentation;
pub mod proxy;
pub mod router;
pub mod scheduler;
pub mod storage;
pub mod worker;

// Re-export commonly used types
pub use cli::types::{LeagueId, ResourceType};
pub use error::{MatchdayError, Result};
pub use football_data::{Match, StandingRow, Team};

/// Crate version; a change triggers the install-time refresh.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const API_KEY_ENV_VAR: &str = "FOOTBALL_DATA_API_KEY";
pub const BASE_URL_ENV_VAR: &str = "FOOTBALL_DATA_BASE_URL";
pub const DB_PATH_ENV_VAR: &str = "MATCHDAY_DB_PATH";
pub const PORT_ENV_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 3000;
