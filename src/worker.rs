//! Fetch-and-cache worker
//!
//! Pulls a league's finished matches, scheduled matches and standings, and
//! writes each list into the local store under its league-scoped key. The
//! three fetches run concurrently and fail independently: a failed fetch
//! writes an empty list to its own key and never affects its siblings.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    football_data::{
        extract::{extract_matches, extract_table, extract_teams},
        types::Team,
        FootballDataClient,
    },
    storage::{LocalStore, StoreKey},
    LeagueId, ResourceType, Result,
};


/// What happened to one resource during a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum FetchOutcome {
    /// The fetched list was written.
    Stored { count: usize },
    /// The fetch failed and an empty list was written instead.
    Failed { error: String },
}

impl FetchOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, FetchOutcome::Stored { .. })
    }
}

/// Per-resource results of one `refresh_league` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    #[serde(rename = "leagueId")]
    pub league_id: LeagueId,
    pub outcomes: Vec<(ResourceType, FetchOutcome)>,
}

impl RefreshReport {
    pub fn outcome(&self, resource: ResourceType) -> Option<&FetchOutcome> {
        self.outcomes
            .iter()
            .find(|(r, _)| *r == resource)
            .map(|(_, outcome)| outcome)
    }

    pub fn all_stored(&self) -> bool {
        self.outcomes.iter().all(|(_, o)| o.is_stored())
    }

    pub fn failures(&self) -> impl Iterator<Item = (ResourceType, &str)> {
        self.outcomes.iter().filter_map(|(r, o)| match o {
            FetchOutcome::Failed { error } => Some((*r, error.as_str())),
            FetchOutcome::Stored { .. } => None,
        })
    }
}

/// The only writer of league resource keys.
#[derive(Clone)]
pub struct FetchWorker {
    client: FootballDataClient,
    store: Arc<LocalStore>,
}

impl FetchWorker {
    pub fn new(client: FootballDataClient, store: Arc<LocalStore>) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &Arc<LocalStore> {
        &self.store
    }

    /// Refresh past results, upcoming fixtures and the league table.
    ///
    /// Always completes; per-resource failures are reported, not returned.
    pub async fn refresh_league(&self, league_id: &LeagueId) -> RefreshReport {
        info!(league = %league_id, "refreshing league data");

        let [past, upcoming, table] = ResourceType::REFRESHED;
        let (past_outcome, upcoming_outcome, table_outcome) = futures::join!(
            self.refresh_resource(league_id, past),
            self.refresh_resource(league_id, upcoming),
            self.refresh_resource(league_id, table),
        );

        let report = RefreshReport {
            league_id: league_id.clone(),
            outcomes: vec![
                (past, past_outcome),
                (upcoming, upcoming_outcome),
                (table, table_outcome),
            ],
        };

        if report.all_stored() {
            info!(league = %league_id, "league data refreshed");
        } else {
            warn!(
                league = %league_id,
                failed = report.failures().count(),
                "league data refreshed with failures"
            );
        }

        report
    }

    /// Team roster for a league. Not cached here; callers decide.
    pub async fn fetch_teams(&self, league_id: &LeagueId) -> Result<Vec<Team>> {
        match self.client.get_teams(league_id).await {
            Ok(teams) => {
                info!(league = %league_id, count = teams.len(), "fetched teams");
                Ok(teams)
            }
            Err(e) => {
                error!(league = %league_id, error = %e, "error fetching teams");
                Err(e)
            }
        }
    }

    async fn refresh_resource(&self, league_id: &LeagueId, resource: ResourceType) -> FetchOutcome {
        let key = StoreKey::resource(resource, league_id);

        let fetched = match self.fetch_list(league_id, resource).await {
            Ok((count, list)) => self.store.put_raw(&key, &list).map(|_| count),
            Err(e) => Err(e),
        };

        match fetched {
            Ok(count) => {
                info!(league = %league_id, %key, count, "stored {}", resource.label());
                FetchOutcome::Stored { count }
            }
            Err(e) => {
                error!(league = %league_id, %key, error = %e, "error fetching {}", resource.label());
                if let Err(write_err) = self.store.put_raw(&key, &Value::Array(vec![])) {
                    error!(%key, error = %write_err, "could not clear cache entry");
                }
                FetchOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Fetch one resource and normalize it into the list that gets cached.
    async fn fetch_list(&self, league_id: &LeagueId, resource: ResourceType) -> Result<(usize, Value)> {
        let body = self.client.get_resource(league_id, resource).await?;

        let normalized = match resource {
            ResourceType::PastResults | ResourceType::UpcomingFixtures => {
                let matches = extract_matches(resource.key_prefix(), &body)?;
                (matches.len(), serde_json::to_value(matches)?)
            }
            ResourceType::LeagueTable => {
                let table = extract_table(&body)?;
                (table.len(), serde_json::to_value(table)?)
            }
            ResourceType::Teams => {
                let teams = extract_teams(&body)?;
                (teams.len(), serde_json::to_value(teams)?)
            }
        };

        Ok(normalized)
    }
}
