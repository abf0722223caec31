//! HTTP client for the football-data.org v4 API

use reqwest::{header::HeaderMap, Client};
use serde_json::Value;
use tracing::debug;

use crate::{
    core::auth_header_map,
    football_data::{extract::extract_teams, types::Team},
    LeagueId, ResourceType, Result,
};

#[cfg(test)]
mod tests;

/// Base path for the football-data.org v4 API.
pub const FOOTBALL_DATA_BASE_URL: &str = "https://api.football-data.org/v4";

/// Finished matches are capped to the most recent ten.
pub const PAST_RESULTS_LIMIT: &str = "10";

/// Path and query for one league resource, relative to the base URL.
pub fn resource_endpoint(
    league_id: &LeagueId,
    resource: ResourceType,
) -> (String, Vec<(&'static str, &'static str)>) {
    let base = format!("/competitions/{}", league_id.as_str());
    match resource {
        ResourceType::PastResults => (
            format!("{base}/matches"),
            vec![("status", "FINISHED"), ("limit", PAST_RESULTS_LIMIT)],
        ),
        ResourceType::UpcomingFixtures => {
            (format!("{base}/matches"), vec![("status", "SCHEDULED")])
        }
        ResourceType::LeagueTable => (format!("{base}/standings"), vec![]),
        ResourceType::Teams => (format!("{base}/teams"), vec![]),
    }
}

/// Thin client over the four per-league endpoints.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct FootballDataClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
}

impl FootballDataClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<&str>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("matchday/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers: auth_header_map(api_key)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET one resource and return the raw JSON body.
    ///
    /// Non-2xx statuses are errors; the body of a failed request is dropped.
    pub async fn get_resource(&self, league_id: &LeagueId, resource: ResourceType) -> Result<Value> {
        let (path, params) = resource_endpoint(league_id, resource);
        let url = format!("{}{}", self.base_url, path);

        debug!(%url, ?params, "requesting {}", resource.label());

        let v = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(v)
    }

    /// Team roster for a league.
    pub async fn get_teams(&self, league_id: &LeagueId) -> Result<Vec<Team>> {
        let body = self.get_resource(league_id, ResourceType::Teams).await?;
        extract_teams(&body)
    }
}
