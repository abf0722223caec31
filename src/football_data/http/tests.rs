//! Unit tests for the football-data HTTP client

use super::*;
use crate::error::MatchdayError;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    fn pl() -> LeagueId {
        LeagueId::new("PL").unwrap()
    }

    #[test]
    fn test_base_url_constant() {
        assert_eq!(FOOTBALL_DATA_BASE_URL, "https://api.football-data.org/v4");
    }

    #[test]
    fn test_resource_endpoints() {
        let (p, q) = resource_endpoint(&pl(), ResourceType::PastResults);
        assert_eq!(p, "/competitions/PL/matches");
        assert_eq!(q, vec![("status", "FINISHED"), ("limit", "10")]);

        let (p, q) = resource_endpoint(&pl(), ResourceType::UpcomingFixtures);
        assert_eq!(p, "/competitions/PL/matches");
        assert_eq!(q, vec![("status", "SCHEDULED")]);

        let (p, q) = resource_endpoint(&pl(), ResourceType::LeagueTable);
        assert_eq!(p, "/competitions/PL/standings");
        assert!(q.is_empty());

        let (p, _) = resource_endpoint(&pl(), ResourceType::Teams);
        assert_eq!(p, "/competitions/PL/teams");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = FootballDataClient::new("http://localhost:9/v4/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9/v4");
    }

    #[tokio::test]
    async fn test_get_resource_sends_token_and_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/PL/matches"))
            .and(query_param("status", "FINISHED"))
            .and(query_param("limit", "10"))
            .and(header("x-auth-token", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matches": [] })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = FootballDataClient::new(mock_server.uri(), Some("secret")).unwrap();
        let body = client
            .get_resource(&pl(), ResourceType::PastResults)
            .await
            .unwrap();

        assert_eq!(body, json!({ "matches": [] }));
    }

    #[tokio::test]
    async fn test_get_resource_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/PL/standings"))
            .respond_with(
                ResponseTemplate::new(429).set_body_json(json!({ "message": "too many requests" })),
            )
            .mount(&mock_server)
            .await;

        let client = FootballDataClient::new(mock_server.uri(), None).unwrap();
        let err = client
            .get_resource(&pl(), ResourceType::LeagueTable)
            .await
            .unwrap_err();

        match err {
            MatchdayError::Http(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(429)),
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_resource_invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/PL/standings"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = FootballDataClient::new(mock_server.uri(), None).unwrap();
        let result = client.get_resource(&pl(), ResourceType::LeagueTable).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_teams() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/SA/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "teams": [{ "id": 98, "name": "AC Milan", "shortName": "Milan", "crest": "98.png" }]
            })))
            .mount(&mock_server)
            .await;

        let client = FootballDataClient::new(mock_server.uri(), None).unwrap();
        let teams = client
            .get_teams(&LeagueId::new("SA").unwrap())
            .await
            .unwrap();

        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].display_name(), "Milan");
    }
}
