//! Cached resource kinds and their store key prefixes.

use crate::error::{MatchdayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A per-league resource held in the local store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceType {
    PastResults,
    UpcomingFixtures,
    LeagueTable,
    Teams,
}

impl ResourceType {
    /// The three resources written by a league refresh, in key order.
    pub const REFRESHED: [ResourceType; 3] = [
        ResourceType::PastResults,
        ResourceType::UpcomingFixtures,
        ResourceType::LeagueTable,
    ];

    /// Key prefix used in the store and the proxy routes.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            ResourceType::PastResults => "pastResults",
            ResourceType::UpcomingFixtures => "upcomingFixtures",
            ResourceType::LeagueTable => "leagueTable",
            ResourceType::Teams => "teams",
        }
    }

    /// Human readable label for logs and proxy error bodies.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::PastResults => "past results",
            ResourceType::UpcomingFixtures => "upcoming fixtures",
            ResourceType::LeagueTable => "league table",
            ResourceType::Teams => "teams",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_prefix())
    }
}

impl FromStr for ResourceType {
    type Err = MatchdayError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pastResults" => Ok(ResourceType::PastResults),
            "upcomingFixtures" => Ok(ResourceType::UpcomingFixtures),
            "leagueTable" => Ok(ResourceType::LeagueTable),
            "teams" => Ok(ResourceType::Teams),
            other => Err(MatchdayError::Store {
                message: format!("unknown resource type: {other}"),
            }),
        }
    }
}
