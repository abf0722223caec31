//! Common utilities shared across commands.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::{
    cli::GlobalOpts,
    error::MatchdayError,
    football_data::{FootballDataClient, FOOTBALL_DATA_BASE_URL},
    presentation::Popup,
    router::{spawn_router, RouterHandle},
    storage::LocalStore,
    worker::FetchWorker,
    LeagueId, Result, API_KEY_ENV_VAR,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub store: Arc<LocalStore>,
    pub client: FootballDataClient,
    api_key: Option<String>,
}

impl CommandContext {
    /// Open the store and build the upstream client from global options
    pub fn new(opts: &GlobalOpts) -> Result<Self> {
        let store = match &opts.db_path {
            Some(path) => LocalStore::open(path)?,
            None => LocalStore::new()?,
        };
        Self::with_store(Arc::new(store), opts)
    }

    pub fn with_store(store: Arc<LocalStore>, opts: &GlobalOpts) -> Result<Self> {
        let api_key = opts
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!("{API_KEY_ENV_VAR} is not set; upstream requests may be rejected");
        }

        let base_url = opts.base_url.as_deref().unwrap_or(FOOTBALL_DATA_BASE_URL);
        let client = FootballDataClient::new(base_url, api_key.as_deref())?;

        Ok(Self {
            store,
            client,
            api_key,
        })
    }

    pub fn worker(&self) -> FetchWorker {
        FetchWorker::new(self.client.clone(), self.store.clone())
    }

    /// Start a router task over a fresh worker
    pub fn router(&self) -> (RouterHandle, JoinHandle<()>) {
        spawn_router(self.worker())
    }

    pub fn popup(&self) -> Popup {
        let (router, _task) = self.router();
        Popup::new(self.store.clone(), router)
    }

    /// Explicit league, else the favourite's league, else the first catalogue entry
    pub fn resolve_league(&self, league: Option<LeagueId>) -> Result<LeagueId> {
        if let Some(league) = league {
            return Ok(league);
        }
        if let Some(favorite) = self.store.favorite_team()? {
            return Ok(favorite.league_id);
        }
        Ok(self
            .store
            .available_leagues()?
            .into_iter()
            .next()
            .map(|l| l.id)
            .unwrap_or_default())
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| MatchdayError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            })
    }
}

/// Resolves on Ctrl-C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
