//! Teams command implementation

use super::common::CommandContext;
use crate::{football_data::Team, LeagueId, Result};

/// Handle the teams command: cached roster, else fetched and cached
pub async fn handle_teams(ctx: &CommandContext, league: Option<LeagueId>) -> Result<Vec<Team>> {
    let league_id = ctx.resolve_league(league)?;

    let mut popup = ctx.popup();
    popup.load_teams(&league_id).await?;
    let teams = std::mem::take(&mut popup.state.teams_in_league);

    if teams.is_empty() {
        println!("No teams found for {league_id}");
    }
    for team in &teams {
        match team.tla.as_deref() {
            Some(tla) => println!("{} ({tla})", team.name),
            None => println!("{}", team.name),
        }
    }

    Ok(teams)
}
