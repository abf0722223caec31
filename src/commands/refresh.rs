//! Refresh command implementation

use super::common::CommandContext;
use crate::{
    worker::{FetchOutcome, RefreshReport},
    LeagueId, Result,
};

/// Handle the refresh command
pub async fn handle_refresh(ctx: &CommandContext, league: Option<LeagueId>) -> Result<RefreshReport> {
    let league_id = ctx.resolve_league(league)?;
    println!("Fetching league data for {league_id}...");

    // tarpaulin::skip - HTTP call, tested via integration tests
    let report = ctx.worker().refresh_league(&league_id).await;
    print_report(&report);

    Ok(report)
}

/// One line per resource: count stored or the error that emptied it
pub fn print_report(report: &RefreshReport) {
    for (resource, outcome) in &report.outcomes {
        match outcome {
            FetchOutcome::Stored { count } => {
                println!("✓ {} stored ({count})", resource.label());
            }
            FetchOutcome::Failed { error } => {
                println!("⚠ {} failed: {error}", resource.label());
            }
        }
    }
}
