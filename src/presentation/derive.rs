//! Pure derivations over cached league data.

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::Display;

use super::format::{format_past_date, format_relative_date};
use crate::football_data::types::{Match, StandingRow, Team};

/// Matches involving `team` by exact name. No team selected keeps everything.
pub fn filter_matches_by_team<'a>(matches: &'a [Match], team: Option<&str>) -> Vec<&'a Match> {
    match team {
        Some(name) => matches.iter().filter(|m| m.involves(name)).collect(),
        None => matches.iter().collect(),
    }
}

/// Filtered past results, most recent first.
pub fn sorted_past_results<'a>(matches: &'a [Match], team: Option<&str>) -> Vec<&'a Match> {
    let mut filtered = filter_matches_by_team(matches, team);
    filtered.sort_by(|a, b| b.utc_date.cmp(&a.utc_date));
    filtered
}

/// Filtered upcoming fixtures, soonest first.
pub fn sorted_upcoming_fixtures<'a>(matches: &'a [Match], team: Option<&str>) -> Vec<&'a Match> {
    let mut filtered = filter_matches_by_team(matches, team);
    filtered.sort_by(|a, b| a.utc_date.cmp(&b.utc_date));
    filtered
}

pub fn most_recent_result<'a>(matches: &'a [Match], team: Option<&str>) -> Option<&'a Match> {
    sorted_past_results(matches, team).into_iter().next()
}

pub fn next_fixture<'a>(matches: &'a [Match], team: Option<&str>) -> Option<&'a Match> {
    sorted_upcoming_fixtures(matches, team).into_iter().next()
}

/// Table rows for the selected team; nothing when no team is selected.
pub fn table_rows<'a>(table: &'a [StandingRow], team: Option<&str>) -> Vec<&'a StandingRow> {
    match team {
        Some(name) => table.iter().filter(|row| row.team.name == name).collect(),
        None => Vec::new(),
    }
}

/// First crest seen for `team` in past results, then upcoming fixtures.
pub fn find_team_crest<'a>(
    past: &'a [Match],
    upcoming: &'a [Match],
    team: &str,
) -> Option<&'a str> {
    past.iter().chain(upcoming).find_map(|m| {
        let side = if m.home_team.name == team {
            &m.home_team
        } else if m.away_team.name == team {
            &m.away_team
        } else {
            return None;
        };
        side.crest.as_deref().filter(|c| !c.is_empty())
    })
}

/// A match prepared for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    pub formatted_date: String,
    pub home_team: Team,
    pub away_team: Team,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub home_win: bool,
    pub away_win: bool,
    pub draw: bool,
    /// No full-time score yet.
    pub upcoming: bool,
}

impl MatchDetails {
    pub fn from_match<Tz>(m: &Match, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let home = m.score.full_time.home;
        let away = m.score.full_time.away;
        let upcoming = home.is_none() && away.is_none();

        let formatted_date = if upcoming {
            format_relative_date(&m.utc_date, now)
        } else {
            format_past_date(&m.utc_date, &now.timezone())
        };

        let (home_win, away_win, draw) = match (home, away) {
            (Some(h), Some(a)) => (h > a, a > h, h == a),
            _ => (false, false, false),
        };

        Self {
            formatted_date,
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            home_score: home,
            away_score: away,
            home_win,
            away_win,
            draw,
            upcoming,
        }
    }
}

/// Score cell text; a missing score shows as `-`.
pub fn score_text(score: Option<u32>) -> String {
    score.map_or_else(|| "-".to_string(), |s| s.to_string())
}
