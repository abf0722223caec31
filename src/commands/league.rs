//! League command implementation

use super::{common::CommandContext, refresh::print_report};
use crate::{presentation::PopupState, LeagueId, Result};

/// Handle the league command: switch league, wait for its refresh, list its teams
pub async fn handle_league(ctx: &CommandContext, league_id: LeagueId) -> Result<PopupState> {
    let mut popup = ctx.popup();
    popup.state.available_leagues = ctx.store.available_leagues()?;

    // tarpaulin::skip - HTTP call, tested via integration tests
    match popup.change_league(league_id.clone()).await? {
        Some(report) => print_report(&report),
        None => println!("⚠ {league_id} refresh still running; showing cached data"),
    }

    println!("{} teams in {league_id}:", popup.state.teams_in_league.len());
    for team in &popup.state.teams_in_league {
        println!("  {}", team.name);
    }

    Ok(popup.state)
}
