//! ID types for football-data competitions.

use crate::error::{MatchdayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for competition codes such as `PL` or `BL1`.
///
/// Numeric competition ids (`2021`) are accepted too, since the upstream API
/// resolves both forms. Codes are non-empty ASCII alphanumerics so they can be
/// embedded in store keys and URL paths without escaping.
///
/// # Examples
///
/// ```rust
/// use matchday::LeagueId;
///
/// let league_id: LeagueId = "PL".parse().unwrap();
/// assert_eq!(league_id.as_str(), "PL");
/// assert_eq!(league_id.to_string(), "PL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LeagueId(String);

impl LeagueId {
    /// Create a new LeagueId, validating the code.
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        let trimmed = code.trim();

        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MatchdayError::InvalidLeagueId { value: code });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the underlying code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LeagueId {
    fn default() -> Self {
        Self("PL".to_string())
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = MatchdayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for LeagueId {
    type Error = MatchdayError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<LeagueId> for String {
    fn from(id: LeagueId) -> Self {
        id.0
    }
}
