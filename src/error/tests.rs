//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod matchday_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = MatchdayError::from(json_error);

        match error {
            MatchdayError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = MatchdayError::from(io_error);

        match error {
            MatchdayError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let error = MatchdayError::from(header_error);

        match error {
            MatchdayError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_database_error_conversion() {
        let db_error = rusqlite::Error::InvalidColumnType(
            0,
            "value".to_string(),
            rusqlite::types::Type::Null,
        );
        let error = MatchdayError::from(db_error);

        match error {
            MatchdayError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_malformed_response_message() {
        let error = MatchdayError::malformed("leagueTable", "no table found");
        let error_string = error.to_string();

        assert!(error_string.contains("leagueTable"));
        assert!(error_string.contains("no table found"));
    }

    #[test]
    fn test_invalid_league_id_message() {
        let error = MatchdayError::InvalidLeagueId {
            value: "P L".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid league ID: \"P L\"");
    }

    #[test]
    fn test_missing_api_key_message() {
        let error = MatchdayError::MissingApiKey {
            env_var: "FOOTBALL_DATA_API_KEY".to_string(),
        };
        assert!(error.to_string().contains("FOOTBALL_DATA_API_KEY"));
    }

    #[test]
    fn test_poison_error_conversion() {
        let lock = std::sync::Arc::new(std::sync::Mutex::new(0));
        let poisoned = lock.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoned.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let error = MatchdayError::from(lock.lock().unwrap_err());
        match error {
            MatchdayError::Store { .. } => (),
            _ => panic!("Expected Store error variant"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = MatchdayError::from(io_error);

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_router_closed_debug_formatting() {
        let error = MatchdayError::RouterClosed;
        assert_eq!(format!("{:?}", error), "RouterClosed");
    }
}
