//! Store key layout

use std::fmt;

use crate::{LeagueId, ResourceType};

/// Every key the store knows about.
///
/// Resource keys are scoped by league as `"<resourceType>_<leagueId>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Resource(ResourceType, LeagueId),
    FavoriteTeam,
    AvailableLeagues,
    InstalledVersion,
}

impl StoreKey {
    pub fn resource(resource: ResourceType, league_id: &LeagueId) -> Self {
        StoreKey::Resource(resource, league_id.clone())
    }

    pub fn to_store_key(&self) -> String {
        match self {
            StoreKey::Resource(resource, league_id) => {
                format!("{}_{}", resource.key_prefix(), league_id.as_str())
            }
            StoreKey::FavoriteTeam => "favoriteTeam".to_string(),
            StoreKey::AvailableLeagues => "availableLeagues".to_string(),
            StoreKey::InstalledVersion => "installedVersion".to_string(),
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_store_key())
    }
}
