//! Popup state and its load/save boundary.
//!
//! `PopupState` is plain data. `Popup` owns it together with the store and a
//! router handle and is the only place state is loaded from or saved to the
//! store.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use std::{fmt::Display, sync::Arc, time::Duration};
use tracing::{debug, info, warn};

use super::{
    derive::{find_team_crest, most_recent_result, next_fixture, table_rows, MatchDetails},
    format::format_updated_at,
};
use crate::{
    error::MatchdayError,
    football_data::types::{Match, StandingRow, Team},
    router::{Message, Reply, RouterHandle},
    storage::{FavoriteTeam, League, LocalStore, StoreKey},
    worker::RefreshReport,
    LeagueId, ResourceType, Result,
};

/// Team shown before the user has picked a favourite.
pub const DEFAULT_TEAM: &str = "Tottenham Hotspur FC";

/// Upper bound on waiting for a league refresh before reading the cache anyway.
pub const DEFAULT_SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupState {
    pub available_leagues: Vec<League>,
    pub selected_league: Option<LeagueId>,
    pub selected_team: Option<String>,
    /// Crest remembered with the favourite team.
    pub team_crest: String,
    pub teams_in_league: Vec<Team>,
    pub past_results: Vec<Match>,
    pub upcoming_fixtures: Vec<Match>,
    pub league_table: Vec<StandingRow>,
    /// Newest write among the three cached league lists.
    pub last_updated: Option<DateTime<Utc>>,
}

impl PopupState {
    pub fn clear_league_data(&mut self) {
        self.past_results.clear();
        self.upcoming_fixtures.clear();
        self.league_table.clear();
        self.last_updated = None;
    }
}

/// Everything the popup displays, derived from a `PopupState`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupView {
    pub team_name: Option<String>,
    pub crest: String,
    pub league: Option<League>,
    pub previous: Option<MatchDetails>,
    pub next: Option<MatchDetails>,
    pub position: Vec<StandingRow>,
    pub last_updated: Option<String>,
}

impl PopupView {
    pub fn build<Tz>(state: &PopupState, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let team = state.selected_team.as_deref();

        let crest = team
            .and_then(|name| {
                find_team_crest(&state.past_results, &state.upcoming_fixtures, name)
            })
            .map(str::to_string)
            .unwrap_or_else(|| state.team_crest.clone());

        let league = state.selected_league.as_ref().and_then(|id| {
            state
                .available_leagues
                .iter()
                .find(|l| &l.id == id)
                .cloned()
        });

        Self {
            team_name: state.selected_team.clone(),
            crest,
            league,
            previous: most_recent_result(&state.past_results, team)
                .map(|m| MatchDetails::from_match(m, now)),
            next: next_fixture(&state.upcoming_fixtures, team)
                .map(|m| MatchDetails::from_match(m, now)),
            position: table_rows(&state.league_table, team)
                .into_iter()
                .cloned()
                .collect(),
            last_updated: state
                .last_updated
                .as_ref()
                .map(|updated| format_updated_at(updated, now)),
        }
    }
}

/// Popup controller: state plus the store and router it talks to.
pub struct Popup {
    store: Arc<LocalStore>,
    router: RouterHandle,
    settle_timeout: Duration,
    pub state: PopupState,
}

impl Popup {
    pub fn new(store: Arc<LocalStore>, router: RouterHandle) -> Self {
        Self {
            store,
            router,
            settle_timeout: DEFAULT_SETTLE_TIMEOUT,
            state: PopupState::default(),
        }
    }

    pub fn with_settle_timeout(mut self, timeout: Duration) -> Self {
        self.settle_timeout = timeout;
        self
    }

    /// Load catalogue, favourite, roster and cached data.
    ///
    /// With a stored favourite its league is refreshed first, bounded by the
    /// settle timeout.
    pub async fn mount(&mut self) -> Result<()> {
        self.state.available_leagues = self.store.available_leagues()?;
        self.state.selected_league = self
            .state
            .available_leagues
            .first()
            .map(|l| l.id.clone());
        self.state.selected_team = Some(DEFAULT_TEAM.to_string());

        if let Some(favorite) = self.store.favorite_team()? {
            debug!(team = %favorite.name, league = %favorite.league_id, "loaded favourite team");
            self.state.selected_team = Some(favorite.name);
            self.state.selected_league = Some(favorite.league_id.clone());
            self.state.team_crest = favorite.crest;
            self.request_refresh(&favorite.league_id).await?;
        }

        if let Some(league_id) = self.state.selected_league.clone() {
            self.load_teams(&league_id).await?;
            self.load_league_data(&league_id)?;
        }

        Ok(())
    }

    /// Roster from the store, else fetched through the router and cached.
    pub async fn load_teams(&mut self, league_id: &LeagueId) -> Result<()> {
        if let Some(teams) = self.store.get_list::<Team>(ResourceType::Teams, league_id)? {
            self.state.teams_in_league = teams;
            return Ok(());
        }

        let response = self.router.send(Message::fetch_teams(league_id.clone())).await?;
        self.state.teams_in_league = match response.reply {
            Reply::Teams { teams } => {
                self.store.put_list(ResourceType::Teams, league_id, &teams)?;
                teams
            }
            other => {
                warn!(league = %league_id, reply = ?other, "failed to fetch teams or invalid response");
                Vec::new()
            }
        };

        Ok(())
    }

    /// Read the three cached lists; absent keys read as empty.
    pub fn load_league_data(&mut self, league_id: &LeagueId) -> Result<()> {
        self.state.past_results = self
            .store
            .get_list(ResourceType::PastResults, league_id)?
            .unwrap_or_default();
        self.state.upcoming_fixtures = self
            .store
            .get_list(ResourceType::UpcomingFixtures, league_id)?
            .unwrap_or_default();
        self.state.league_table = self
            .store
            .get_list(ResourceType::LeagueTable, league_id)?
            .unwrap_or_default();

        let mut newest = None;
        for resource in ResourceType::REFRESHED {
            let written = self
                .store
                .updated_at(&StoreKey::resource(resource, league_id))?;
            newest = newest.max(written);
        }
        self.state.last_updated =
            newest.and_then(|secs| DateTime::from_timestamp(i64::try_from(secs).ok()?, 0));

        debug!(
            league = %league_id,
            past = self.state.past_results.len(),
            upcoming = self.state.upcoming_fixtures.len(),
            table = self.state.league_table.len(),
            "league data loaded"
        );
        Ok(())
    }

    /// Make `team` the favourite within the selected league and persist it.
    pub fn select_team(&mut self, team: &Team) -> Result<FavoriteTeam> {
        let league_id = self.state.selected_league.clone().unwrap_or_default();
        let favorite = FavoriteTeam {
            name: team.name.clone(),
            league_id,
            crest: team.crest.clone().unwrap_or_default(),
        };

        self.store.save_favorite_team(&favorite)?;
        self.state.selected_team = Some(favorite.name.clone());
        self.state.team_crest = favorite.crest.clone();
        info!(team = %favorite.name, league = %favorite.league_id, "favourite team saved");

        Ok(favorite)
    }

    /// Look a team up in the loaded roster by exact name and select it.
    pub fn select_team_by_name(&mut self, name: &str) -> Result<FavoriteTeam> {
        let team = self
            .state
            .teams_in_league
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .ok_or_else(|| MatchdayError::TeamNotFound {
                name: name.to_string(),
                league: self
                    .state
                    .selected_league
                    .as_ref()
                    .map(|l| l.to_string())
                    .unwrap_or_default(),
            })?;
        self.select_team(&team)
    }

    /// Switch league: clear the selection, refresh, then re-read the cache.
    pub async fn change_league(&mut self, league_id: LeagueId) -> Result<Option<RefreshReport>> {
        info!(league = %league_id, "changing league");
        self.state.selected_league = Some(league_id.clone());
        self.state.selected_team = None;
        self.state.team_crest.clear();
        self.state.clear_league_data();

        let report = self.request_refresh(&league_id).await?;
        self.load_teams(&league_id).await?;
        self.load_league_data(&league_id)?;

        Ok(report)
    }

    pub fn view<Tz>(&self, now: &DateTime<Tz>) -> PopupView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        PopupView::build(&self.state, now)
    }

    async fn request_refresh(&self, league_id: &LeagueId) -> Result<Option<RefreshReport>> {
        let response = self
            .router
            .send(Message::update_league(league_id.clone()))
            .await?;
        debug!(reply = ?response.reply, "league data update response");

        match tokio::time::timeout(self.settle_timeout, response.wait_for_completion()).await {
            Ok(report) => Ok(report),
            Err(_) => {
                warn!(
                    league = %league_id,
                    timeout_ms = self.settle_timeout.as_millis() as u64,
                    "refresh still running; reading cache as it stands"
                );
                Ok(None)
            }
        }
    }
}
