//! CLI argument definitions and parsing structures.

use std::path::PathBuf;

use super::types::ids::LeagueId;
use crate::{
    scheduler::DEFAULT_REFRESH_INTERVAL_MINUTES, API_KEY_ENV_VAR, BASE_URL_ENV_VAR,
    DB_PATH_ENV_VAR, DEFAULT_PORT, PORT_ENV_VAR,
};
use clap::{Args, Parser, Subcommand};

/// Connection settings shared by every command
#[derive(Debug, Clone, Args)]
pub struct GlobalOpts {
    /// Store file (default: `<cache dir>/matchday/store.db`).
    #[clap(long, global = true, env = DB_PATH_ENV_VAR)]
    pub db_path: Option<PathBuf>,

    /// football-data.org API token.
    #[clap(long, global = true, env = API_KEY_ENV_VAR, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Upstream API base URL (override for a proxy or a mock server).
    #[clap(long, global = true, env = BASE_URL_ENV_VAR)]
    pub base_url: Option<String>,
}

#[derive(Debug, Parser)]
#[clap(name = "matchday", version, about = "Follow one football team from the terminal")]
pub struct Matchday {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch past results, upcoming fixtures and the table for a league.
    Refresh {
        /// League code, e.g. `PL` (default: the favourite's league).
        #[clap(long, short)]
        league: Option<LeagueId>,
    },

    /// List the teams in a league, fetching the roster if it is not cached.
    Teams {
        /// League code, e.g. `PL` (default: the favourite's league).
        #[clap(long, short)]
        league: Option<LeagueId>,
    },

    /// Show the popup: previous result, next fixture and league position.
    Show {
        /// Output the view as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Pick the favourite team.
    Favorite {
        /// League the team plays in.
        #[clap(long, short)]
        league: LeagueId,

        /// Exact team name, e.g. "Arsenal FC".
        #[clap(long, short)]
        team: String,
    },

    /// Switch league: refresh it and list its teams.
    League {
        #[clap(long, short)]
        league: LeagueId,
    },

    /// List the available leagues.
    Leagues,

    /// Send a raw JSON message through the router and print the reply.
    ///
    /// e.g. `{"type":"updateLeague","leagueId":"PL"}`
    Send {
        message: String,
    },

    /// Refresh on install/update, then on a fixed interval until Ctrl-C.
    Watch {
        /// League code, e.g. `PL` (default: the favourite's league).
        #[clap(long, short)]
        league: Option<LeagueId>,

        /// Minutes between refreshes.
        #[clap(long, default_value_t = DEFAULT_REFRESH_INTERVAL_MINUTES)]
        interval_minutes: u64,
    },

    /// Run the HTTP proxy that keeps the API key server-side.
    Serve {
        #[clap(long, short, env = PORT_ENV_VAR, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}
