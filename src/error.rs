//! Error types for the matchday cache

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, MatchdayError>;

#[derive(Error, Debug)]
pub enum MatchdayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("System time error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Unexpected response shape for {resource}: {reason}")]
    MalformedResponse { resource: String, reason: String },

    #[error("Invalid league ID: {value:?}")]
    InvalidLeagueId { value: String },

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Team {name:?} not found in league {league}")]
    TeamNotFound { name: String, league: String },

    #[error("Message router is no longer running")]
    RouterClosed,

    #[error("No API key configured; set {env_var}")]
    MissingApiKey { env_var: String },
}

impl MatchdayError {
    pub(crate) fn malformed(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        MatchdayError::MalformedResponse {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for MatchdayError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        MatchdayError::Store {
            message: err.to_string(),
        }
    }
}
