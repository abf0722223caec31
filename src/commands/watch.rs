//! Watch command implementation

use super::common::{shutdown_signal, CommandContext};
use crate::{scheduler::Scheduler, LeagueId, Result, VERSION};

/// Handle the watch command: install-time refresh, then periodic refresh until Ctrl-C
pub async fn handle_watch(
    ctx: &CommandContext,
    league: Option<LeagueId>,
    interval_minutes: u64,
) -> Result<()> {
    let league_id = ctx.resolve_league(league)?;
    println!("Watching {league_id} every {interval_minutes} minutes (Ctrl-C to stop)");

    // tarpaulin::skip - long-running loop
    Scheduler::with_interval_minutes(ctx.worker(), league_id, interval_minutes)
        .run_until(VERSION, shutdown_signal())
        .await
}
