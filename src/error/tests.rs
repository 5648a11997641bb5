//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod lineup_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = LineupError::from(json_error);

        match error {
            LineupError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LineupError::from(io_error);

        match error {
            LineupError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_storage_error_conversion() {
        let error = LineupError::from(anyhow::anyhow!("disk full"));

        match error {
            LineupError::Storage(ref inner) => assert_eq!(inner.to_string(), "disk full"),
            _ => panic!("Expected Storage error variant"),
        }
        assert_eq!(error.to_string(), "Storage error: disk full");
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "abc".parse::<u64>().unwrap_err();
        let error = LineupError::from(parse_error);

        match error {
            LineupError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_malformed_lineup_display() {
        let error = LineupError::MalformedLineup {
            game_id: 42,
            reason: "expected a list or map, found number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed lineup for game 42: expected a list or map, found number"
        );
    }

    #[test]
    fn test_missing_database_path_display() {
        let error = LineupError::MissingDatabasePath {
            env_var: "LINEUP_STATS_DB".to_string(),
        };
        assert!(error.to_string().contains("LINEUP_STATS_DB"));
    }

    #[test]
    fn test_invalid_category_display() {
        let error = LineupError::InvalidCategory {
            category: "MIDFIELD".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid position category: MIDFIELD");
    }

    #[test]
    fn test_not_found_display() {
        let player = LineupError::PlayerNotFound { player_id: 7 };
        let team = LineupError::TeamNotFound { team_id: 3 };
        assert_eq!(player.to_string(), "Player not found: 7");
        assert_eq!(team.to_string(), "Team not found: 3");
    }
}
