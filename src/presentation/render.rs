//! Plain-text rendering of a `PopupView`.

use std::fmt::Write;

use super::{derive::score_text, derive::MatchDetails, state::PopupView};
use crate::football_data::types::StandingRow;

pub const NO_PAST_RESULTS: &str = "No past results";
pub const NO_UPCOMING_FIXTURES: &str = "No upcoming fixtures";
pub const NO_LEAGUE_POSITION: &str = "No league position data";

/// Render the popup as text: header, previous result, next fixture, table row.
pub fn render_text(view: &PopupView) -> String {
    let mut out = String::new();

    let team = view.team_name.as_deref().unwrap_or("No team selected");
    let _ = writeln!(out, "{team}");
    if let Some(league) = &view.league {
        let _ = writeln!(out, "{} ({})", league.name, league.country);
    }
    if !view.crest.is_empty() {
        let _ = writeln!(out, "Crest: {}", view.crest);
    }
    if let Some(updated) = &view.last_updated {
        let _ = writeln!(out, "Updated {updated}");
    }

    let _ = writeln!(out, "\nPrevious");
    match &view.previous {
        Some(details) => render_match(&mut out, details),
        None => {
            let _ = writeln!(out, "  {NO_PAST_RESULTS}");
        }
    }

    let _ = writeln!(out, "\nNext Fixture");
    match &view.next {
        Some(details) => render_match(&mut out, details),
        None => {
            let _ = writeln!(out, "  {NO_UPCOMING_FIXTURES}");
        }
    }

    let _ = writeln!(out, "\nLeague Position");
    if view.position.is_empty() {
        let _ = writeln!(out, "  {NO_LEAGUE_POSITION}");
    } else {
        for row in &view.position {
            render_position(&mut out, row);
        }
    }

    out
}

fn render_match(out: &mut String, details: &MatchDetails) {
    let _ = writeln!(out, "  {}", details.formatted_date);
    if details.upcoming {
        let _ = writeln!(
            out,
            "  {} vs {}",
            details.home_team.display_name(),
            details.away_team.display_name()
        );
        return;
    }

    let marker = |won: bool| if won { " *" } else { "" };
    let _ = writeln!(
        out,
        "  {}{} {} - {} {}{}",
        details.home_team.display_name(),
        marker(details.home_win),
        score_text(details.home_score),
        score_text(details.away_score),
        details.away_team.display_name(),
        marker(details.away_win),
    );
    if details.draw {
        let _ = writeln!(out, "  Draw");
    }
}

fn render_position(out: &mut String, row: &StandingRow) {
    let _ = writeln!(
        out,
        "  {}. {} {} pts",
        row.position,
        row.team.display_name(),
        row.points
    );
    let _ = writeln!(
        out,
        "  P: {} | W: {} | D: {} | L: {}",
        row.played_games, row.won, row.draw, row.lost
    );
}

/// The view as pretty-printed JSON.
pub fn render_json(view: &PopupView) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
