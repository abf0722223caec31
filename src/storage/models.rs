//! Data models for user choices held in the store

use serde::{Deserialize, Serialize};

use super::{keys::StoreKey, schema::LocalStore};
use crate::{LeagueId, Result};

/// A competition the user can pick from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub country: String,
}

impl League {
    fn fallback(id: &str, name: &str, country: &str) -> Self {
        Self {
            id: LeagueId::new(id).unwrap_or_default(),
            name: name.to_string(),
            country: country.to_string(),
        }
    }
}

/// The single team being tracked; overwritten wholesale on change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteTeam {
    pub name: String,
    #[serde(rename = "leagueId")]
    pub league_id: LeagueId,
    #[serde(default)]
    pub crest: String,
}

/// Catalogue used when no `availableLeagues` list has been stored.
pub fn fallback_leagues() -> Vec<League> {
    vec![
        League::fallback("PL", "Premier League", "England"),
        League::fallback("PD", "LaLiga", "Spain"),
        League::fallback("SA", "Serie A", "Italy"),
        League::fallback("BL1", "Bundesliga", "Germany"),
        League::fallback("FL1", "Ligue 1", "France"),
        League::fallback("CL", "UEFA Champions League", "Europe"),
        League::fallback("WC", "FIFA World Cup", "International"),
        League::fallback("DED", "Eredivisie", "Netherlands"),
        League::fallback("PPL", "Primeira Liga", "Portugal"),
        League::fallback("ELC", "EFL Championship", "England"),
        League::fallback("BSA", "Brasileirão", "Brazil"),
    ]
}

impl LocalStore {
    pub fn favorite_team(&self) -> Result<Option<FavoriteTeam>> {
        self.get(&StoreKey::FavoriteTeam)
    }

    pub fn save_favorite_team(&self, team: &FavoriteTeam) -> Result<()> {
        self.put(&StoreKey::FavoriteTeam, team)
    }

    /// Stored catalogue if it is non-empty, the fallback list otherwise.
    pub fn available_leagues(&self) -> Result<Vec<League>> {
        match self.get::<Vec<League>>(&StoreKey::AvailableLeagues)? {
            Some(leagues) if !leagues.is_empty() => Ok(leagues),
            _ => Ok(fallback_leagues()),
        }
    }

    pub fn save_available_leagues(&self, leagues: &[League]) -> Result<()> {
        self.put(&StoreKey::AvailableLeagues, leagues)
    }

    pub fn installed_version(&self) -> Result<Option<String>> {
        self.get(&StoreKey::InstalledVersion)
    }

    pub fn record_installed_version(&self, version: &str) -> Result<()> {
        self.put(&StoreKey::InstalledVersion, version)
    }
}
