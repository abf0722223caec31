//! Favorite command implementation

use super::common::CommandContext;
use crate::{storage::FavoriteTeam, LeagueId, Result};

/// Handle the favorite command: find the team in the league roster and save it
pub async fn handle_favorite(
    ctx: &CommandContext,
    league_id: LeagueId,
    team: &str,
) -> Result<FavoriteTeam> {
    let mut popup = ctx.popup();
    popup.state.selected_league = Some(league_id.clone());
    popup.load_teams(&league_id).await?;

    let favorite = popup.select_team_by_name(team)?;
    println!("✓ Favourite team set to {} ({})", favorite.name, favorite.league_id);

    Ok(favorite)
}
