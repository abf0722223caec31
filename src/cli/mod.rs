//! CLI argument definitions and parsing.

pub mod args;
pub mod types;

pub use args::{Commands, GlobalOpts, Matchday};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_cli_definition_is_valid() {
        Matchday::command().debug_assert();
    }

    #[test]
    fn test_parse_favorite() {
        let app = Matchday::try_parse_from([
            "matchday",
            "favorite",
            "--league",
            "SA",
            "--team",
            "AC Milan",
        ])
        .unwrap();

        match app.command {
            Commands::Favorite { league, team } => {
                assert_eq!(league.as_str(), "SA");
                assert_eq!(team, "AC Milan");
            }
            other => panic!("Expected favorite, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_league_rejected() {
        assert!(Matchday::try_parse_from(["matchday", "refresh", "--league", "P L"]).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let app = Matchday::try_parse_from([
            "matchday",
            "show",
            "--json",
            "--db-path",
            "/tmp/store.db",
            "--base-url",
            "http://localhost:3000",
        ])
        .unwrap();

        assert!(matches!(app.command, Commands::Show { json: true }));
        assert_eq!(
            app.global.db_path.as_deref(),
            Some(std::path::Path::new("/tmp/store.db"))
        );
        assert_eq!(app.global.base_url.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_watch_defaults() {
        let app = Matchday::try_parse_from(["matchday", "watch"]).unwrap();
        match app.command {
            Commands::Watch {
                league,
                interval_minutes,
            } => {
                assert!(league.is_none());
                assert_eq!(interval_minutes, 600);
            }
            other => panic!("Expected watch, got {other:?}"),
        }
    }
}
