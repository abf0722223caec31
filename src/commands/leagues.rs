//! Leagues command implementation

use std::collections::HashSet;

use super::common::CommandContext;
use crate::{
    storage::{League, StoreKey},
    ResourceType, Result,
};

/// One catalogue entry as listed by the leagues command.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueListing {
    pub league: League,
    pub favorite: bool,
    /// At least one refreshed list for this league is in the store.
    pub cached: bool,
}

/// Handle the leagues command; the favourite's league is starred and
/// leagues with cached data are tagged
pub fn handle_leagues(ctx: &CommandContext) -> Result<Vec<LeagueListing>> {
    let favorite_league = ctx.store.favorite_team()?.map(|f| f.league_id);
    let stored: HashSet<String> = ctx.store.keys()?.into_iter().collect();

    let listings: Vec<LeagueListing> = ctx
        .store
        .available_leagues()?
        .into_iter()
        .map(|league| {
            let cached = ResourceType::REFRESHED.iter().any(|resource| {
                stored.contains(&StoreKey::resource(*resource, &league.id).to_store_key())
            });
            LeagueListing {
                favorite: favorite_league.as_ref() == Some(&league.id),
                cached,
                league,
            }
        })
        .collect();

    for listing in &listings {
        let marker = if listing.favorite { "*" } else { " " };
        let suffix = if listing.cached { " [cached]" } else { "" };
        println!(
            "{marker} {:<4} {} ({}){suffix}",
            listing.league.id.as_str(),
            listing.league.name,
            listing.league.country
        );
    }

    Ok(listings)
}
