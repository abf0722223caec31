//! Periodic refresh of the active league
//!
//! One league is refreshed on install/update and then on a fixed interval.
//! Switching leagues is an on-demand refresh through the router, not a
//! second schedule.

use std::{future::Future, time::Duration};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::info;

use crate::{
    worker::{FetchWorker, RefreshReport},
    LeagueId, Result,
};

/// Upstream free tier is rate limited; keep polling infrequent.
pub const DEFAULT_REFRESH_INTERVAL_MINUTES: u64 = 600;

/// `interval_at` panics on a zero period.
const MIN_INTERVAL: Duration = Duration::from_secs(1);

pub struct Scheduler {
    worker: FetchWorker,
    league_id: LeagueId,
    interval: Duration,
}

impl Scheduler {
    pub fn new(worker: FetchWorker, league_id: LeagueId, interval: Duration) -> Self {
        Self {
            worker,
            league_id,
            interval: interval.max(MIN_INTERVAL),
        }
    }

    pub fn with_interval_minutes(worker: FetchWorker, league_id: LeagueId, minutes: u64) -> Self {
        Self::new(worker, league_id, Duration::from_secs(minutes.max(1) * 60))
    }

    /// Refresh once if `version` differs from the last recorded install.
    pub async fn run_install_hook(&self, version: &str) -> Result<Option<RefreshReport>> {
        let store = self.worker.store();
        if store.installed_version()?.as_deref() == Some(version) {
            return Ok(None);
        }

        info!(version, league = %self.league_id, "installed or updated; fetching initial data");
        let report = self.worker.refresh_league(&self.league_id).await;
        store.record_installed_version(version)?;
        Ok(Some(report))
    }

    /// Run the install hook, then refresh on every interval until `shutdown` resolves.
    pub async fn run_until<F>(self, version: &str, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        self.run_install_hook(version).await?;

        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(
            league = %self.league_id,
            every_secs = self.interval.as_secs(),
            "scheduled refresh running"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    info!(league = %self.league_id, "timer fired; fetching updated data");
                    self.worker.refresh_league(&self.league_id).await;
                }
                _ = &mut shutdown => {
                    info!("scheduler shutting down");
                    break;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{football_data::FootballDataClient, storage::LocalStore};
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    async fn mock_upstream() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "matches": [],
                "table": []
            })))
            .mount(&server)
            .await;
        server
    }

    fn worker_for(server: &MockServer) -> FetchWorker {
        let client = FootballDataClient::new(server.uri(), None).unwrap();
        FetchWorker::new(client, Arc::new(LocalStore::new_in_memory().unwrap()))
    }

    #[test]
    fn test_interval_minutes_floor() {
        let worker = FetchWorker::new(
            FootballDataClient::new("http://127.0.0.1:9", None).unwrap(),
            Arc::new(LocalStore::new_in_memory().unwrap()),
        );
        let scheduler = Scheduler::with_interval_minutes(worker, LeagueId::default(), 0);
        assert_eq!(scheduler.interval, Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_zero_interval_is_floored() {
        let server = mock_upstream().await;
        let scheduler = Scheduler::new(worker_for(&server), LeagueId::default(), Duration::ZERO);
        assert_eq!(scheduler.interval, MIN_INTERVAL);

        // Loop starts and stops without panicking on the interval.
        scheduler
            .run_until(crate::VERSION, tokio::time::sleep(Duration::from_millis(50)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_install_hook_runs_once_per_version() {
        let server = mock_upstream().await;
        let scheduler = Scheduler::new(
            worker_for(&server),
            LeagueId::default(),
            Duration::from_secs(3600),
        );

        let first = scheduler.run_install_hook("0.1.0").await.unwrap();
        assert!(first.unwrap().all_stored());
        assert!(scheduler.run_install_hook("0.1.0").await.unwrap().is_none());

        // An update triggers another initial fetch.
        assert!(scheduler.run_install_hook("0.2.0").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_run_until_refreshes_on_interval() {
        let server = mock_upstream().await;
        let scheduler = Scheduler::new(
            worker_for(&server),
            LeagueId::default(),
            Duration::from_millis(100),
        );

        scheduler
            .run_until("0.1.0", tokio::time::sleep(Duration::from_millis(350)))
            .await
            .unwrap();

        // Three requests per refresh: the install refresh plus at least one tick.
        let requests = server.received_requests().await.unwrap();
        assert!(requests.len() >= 6, "only {} requests", requests.len());
        assert_eq!(requests.len() % 3, 0);
    }
}
