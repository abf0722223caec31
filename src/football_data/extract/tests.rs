//! Unit tests for response extraction

use super::*;
use serde_json::json;

fn row(position: u32, name: &str) -> Value {
    json!({
        "position": position,
        "team": { "id": position, "name": name },
        "playedGames": 10,
        "won": 5,
        "draw": 3,
        "lost": 2,
        "points": 18
    })
}

#[test]
fn test_primary_standings_shape() {
    let body = json!({
        "competition": { "code": "PL" },
        "standings": [
            { "stage": "REGULAR_SEASON", "type": "TOTAL", "table": [row(1, "Arsenal FC"), row(2, "Liverpool FC")] },
            { "stage": "REGULAR_SEASON", "type": "HOME", "table": [row(1, "Liverpool FC")] }
        ]
    });

    let (strategy, _) = locate_table(&body).unwrap();
    assert_eq!(strategy, "standings[0].table");

    let table = extract_table(&body).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].team.name, "Arsenal FC");
}

#[test]
fn test_table_fallback_is_verbatim() {
    let rows = json!([row(1, "PSV"), row(2, "Feyenoord")]);
    let body = json!({ "table": rows.clone() });

    let (strategy, table) = locate_table(&body).unwrap();
    assert_eq!(strategy, "table");
    assert_eq!(table, &rows);

    let extracted = extract_table(&body).unwrap();
    assert_eq!(extracted.len(), 2);
    assert_eq!(extracted[1].team.name, "Feyenoord");
}

#[test]
fn test_standing_fallback_before_table() {
    let body = json!({
        "standing": [row(1, "FC Porto")],
        "table": [row(1, "SL Benfica")]
    });

    let (strategy, _) = locate_table(&body).unwrap();
    assert_eq!(strategy, "standing");
    assert_eq!(extract_table(&body).unwrap()[0].team.name, "FC Porto");
}

#[test]
fn test_empty_standings_falls_through() {
    let body = json!({ "standings": [], "table": [row(3, "Celtic FC")] });

    let table = extract_table(&body).unwrap();
    assert_eq!(table[0].position, 3);
}

#[test]
fn test_non_array_candidate_is_skipped() {
    let body = json!({ "standings": [{ "table": null }], "standing": "n/a" });

    assert!(locate_table(&body).is_none());
    match extract_table(&body).unwrap_err() {
        MatchdayError::MalformedResponse { resource, .. } => assert_eq!(resource, "leagueTable"),
        other => panic!("Expected MalformedResponse, got {other:?}"),
    }
}

#[test]
fn test_malformed_rows_are_reported() {
    let body = json!({ "table": [{ "position": "first" }] });
    assert!(extract_table(&body).is_err());
}

#[test]
fn test_extract_matches() {
    let body = json!({
        "resultSet": { "count": 1 },
        "matches": [{
            "utcDate": "2024-01-01T12:30:00Z",
            "status": "FINISHED",
            "homeTeam": { "id": 1, "name": "A" },
            "awayTeam": { "id": 2, "name": "B" },
            "score": { "fullTime": { "home": 0, "away": 0 } }
        }]
    });

    let matches = extract_matches("pastResults", &body).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].home_team.name, "A");
}

#[test]
fn test_extract_matches_missing_key() {
    let body = json!({ "errorCode": 403, "message": "restricted" });

    match extract_matches("upcomingFixtures", &body).unwrap_err() {
        MatchdayError::MalformedResponse { resource, .. } => {
            assert_eq!(resource, "upcomingFixtures")
        }
        other => panic!("Expected MalformedResponse, got {other:?}"),
    }
}

#[test]
fn test_extract_teams() {
    let body = json!({ "teams": [{ "id": 57, "name": "Arsenal FC", "crest": "57.png" }] });

    let teams = extract_teams(&body).unwrap();
    assert_eq!(teams[0].crest.as_deref(), Some("57.png"));
    assert!(extract_teams(&json!({})).is_err());
}
