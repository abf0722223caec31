use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};


/// Placeholder teams in undrawn knockout ties come back with `"name": null`.
fn de_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(deserialize_with = "de_null_as_empty", default)]
    pub name: String,
    #[serde(rename = "shortName", default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tla: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crest: Option<String>,
}

impl Team {
    /// Short name when the API provides one, full name otherwise.
    pub fn display_name(&self) -> &str {
        match self.short_name.as_deref() {
            Some(short) if !short.is_empty() => short,
            _ => &self.name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Timed,
    InPlay,
    Paused,
    Finished,
    Postponed,
    Suspended,
    Cancelled,
    Awarded,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FullTimeScore {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Score {
    #[serde(rename = "fullTime", default)]
    pub full_time: FullTimeScore,
}

/// One match as returned by `/competitions/{id}/matches`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Match {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "utcDate")]
    pub utc_date: DateTime<Utc>,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchday: Option<u32>,
    #[serde(rename = "homeTeam")]
    pub home_team: Team,
    #[serde(rename = "awayTeam")]
    pub away_team: Team,
    #[serde(default)]
    pub score: Score,
}

impl Match {
    /// Whether the named team plays in this match, by exact name.
    pub fn involves(&self, team_name: &str) -> bool {
        self.home_team.name == team_name || self.away_team.name == team_name
    }
}

/// One row of a league table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingRow {
    pub position: u32,
    pub team: Team,
    #[serde(rename = "playedGames", default)]
    pub played_games: u32,
    #[serde(default)]
    pub won: u32,
    #[serde(default)]
    pub draw: u32,
    #[serde(default)]
    pub lost: u32,
    /// Can go negative after point deductions.
    #[serde(default)]
    pub points: i32,
    #[serde(rename = "goalsFor", default, skip_serializing_if = "Option::is_none")]
    pub goals_for: Option<i32>,
    #[serde(rename = "goalsAgainst", default, skip_serializing_if = "Option::is_none")]
    pub goals_against: Option<i32>,
    #[serde(rename = "goalDifference", default, skip_serializing_if = "Option::is_none")]
    pub goal_difference: Option<i32>,
}
