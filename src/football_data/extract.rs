//! Pull the cached lists out of raw football-data response bodies.
//!
//! Match endpoints always carry a `matches` array. Standings responses have
//! shipped in a few shapes over time, so the table is located by trying an
//! ordered list of strategies and taking the first that yields an array.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::{
    error::MatchdayError,
    football_data::types::{Match, StandingRow, Team},
    Result,
};

#[cfg(test)]
mod tests;

/// Locates a candidate table inside a standings body.
pub type TableStrategy = for<'a> fn(&'a Value) -> Option<&'a Value>;

fn first_standing_table(body: &Value) -> Option<&Value> {
    body.get("standings")?.get(0)?.get("table")
}

fn standing_field(body: &Value) -> Option<&Value> {
    body.get("standing")
}

fn table_field(body: &Value) -> Option<&Value> {
    body.get("table")
}

/// Tried in order; first array wins.
pub const STANDINGS_STRATEGIES: &[(&str, TableStrategy)] = &[
    ("standings[0].table", first_standing_table),
    ("standing", standing_field),
    ("table", table_field),
];

/// Return the raw table array and the name of the strategy that found it.
pub fn locate_table(body: &Value) -> Option<(&'static str, &Value)> {
    STANDINGS_STRATEGIES.iter().find_map(|(name, strategy)| {
        strategy(body)
            .filter(|candidate| candidate.is_array())
            .map(|table| (*name, table))
    })
}

pub fn extract_table(body: &Value) -> Result<Vec<StandingRow>> {
    let (_, table) = locate_table(body)
        .ok_or_else(|| MatchdayError::malformed("leagueTable", "no standings table in response"))?;
    decode_list("leagueTable", table)
}

pub fn extract_matches(resource: &str, body: &Value) -> Result<Vec<Match>> {
    let matches = body
        .get("matches")
        .filter(|v| v.is_array())
        .ok_or_else(|| MatchdayError::malformed(resource, "missing `matches` array"))?;
    decode_list(resource, matches)
}

pub fn extract_teams(body: &Value) -> Result<Vec<Team>> {
    let teams = body
        .get("teams")
        .filter(|v| v.is_array())
        .ok_or_else(|| MatchdayError::malformed("teams", "missing `teams` array"))?;
    decode_list("teams", teams)
}

fn decode_list<T: DeserializeOwned>(resource: &str, list: &Value) -> Result<Vec<T>> {
    Vec::<T>::deserialize(list).map_err(|e| MatchdayError::malformed(resource, e.to_string()))
}
