//! Message router between the presentation side and the worker
//!
//! Two request shapes are understood, matching the popup protocol:
//!
//! ```json
//! {"action": "fetchTeams", "leagueId": "PL"}   -> {"teams": [...]} | {"error": "..."}
//! {"type": "updateLeague", "leagueId": "PL"}   -> {"status": "League data fetch initiated"}
//! ```
//!
//! The router runs as its own task. Each request carries a oneshot channel for
//! its reply, so callers always await the answer. `updateLeague` replies before
//! the refresh finishes and hands back a receiver that resolves once it has.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};
use tracing::{debug, warn};

use crate::{
    error::MatchdayError,
    football_data::types::Team,
    worker::{FetchWorker, RefreshReport},
    LeagueId, Result,
};


pub const FETCH_INITIATED: &str = "League data fetch initiated";
pub const FETCH_TEAMS_FAILED: &str = "Failed to fetch teams";
pub const UNKNOWN_MESSAGE: &str = "Unknown message";

const CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "fetchTeams")]
    FetchTeams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    #[serde(rename = "updateLeague")]
    UpdateLeague,
}

/// A request sent to the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    FetchTeams {
        action: Action,
        #[serde(rename = "leagueId")]
        league_id: LeagueId,
    },
    UpdateLeague {
        #[serde(rename = "type")]
        kind: MessageType,
        #[serde(rename = "leagueId")]
        league_id: LeagueId,
    },
}

impl Message {
    pub fn fetch_teams(league_id: LeagueId) -> Self {
        Message::FetchTeams {
            action: Action::FetchTeams,
            league_id,
        }
    }

    pub fn update_league(league_id: LeagueId) -> Self {
        Message::UpdateLeague {
            kind: MessageType::UpdateLeague,
            league_id,
        }
    }

    pub fn league_id(&self) -> &LeagueId {
        match self {
            Message::FetchTeams { league_id, .. } | Message::UpdateLeague { league_id, .. } => {
                league_id
            }
        }
    }
}

/// The JSON reply delivered for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    Teams { teams: Vec<Team> },
    Status { status: String },
    Error { error: String },
}

/// A reply plus, for `updateLeague`, the refresh completion signal.
#[derive(Debug)]
pub struct Response {
    pub reply: Reply,
    pub completion: Option<oneshot::Receiver<RefreshReport>>,
}

impl Response {
    fn reply(reply: Reply) -> Self {
        Self {
            reply,
            completion: None,
        }
    }

    /// Wait for the refresh started by this request, if any.
    pub async fn wait_for_completion(self) -> Option<RefreshReport> {
        match self.completion {
            Some(rx) => rx.await.ok(),
            None => None,
        }
    }
}

struct Envelope {
    message: Message,
    reply_to: oneshot::Sender<Response>,
}

/// Cloneable client side of the router.
#[derive(Clone)]
pub struct RouterHandle {
    tx: mpsc::Sender<Envelope>,
}

impl RouterHandle {
    pub async fn send(&self, message: Message) -> Result<Response> {
        let (reply_to, reply_rx) = oneshot::channel();
        self.tx
            .send(Envelope { message, reply_to })
            .await
            .map_err(|_| MatchdayError::RouterClosed)?;
        reply_rx.await.map_err(|_| MatchdayError::RouterClosed)
    }

    /// Send a raw JSON message; shapes the router does not know get an error reply.
    pub async fn send_json(&self, raw: Value) -> Result<Response> {
        match serde_json::from_value::<Message>(raw) {
            Ok(message) => self.send(message).await,
            Err(e) => {
                warn!(error = %e, "rejecting unrecognized message");
                Ok(Response::reply(Reply::Error {
                    error: UNKNOWN_MESSAGE.to_string(),
                }))
            }
        }
    }
}

/// Receives requests and delegates them to the worker.
pub struct MessageRouter {
    worker: FetchWorker,
    rx: mpsc::Receiver<Envelope>,
}

impl MessageRouter {
    pub fn new(worker: FetchWorker) -> (Self, RouterHandle) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        (Self { worker, rx }, RouterHandle { tx })
    }

    /// Serve requests until every handle is dropped.
    pub async fn run(mut self) {
        while let Some(envelope) = self.rx.recv().await {
            self.dispatch(envelope);
        }
        debug!("message router stopped");
    }

    fn dispatch(&self, Envelope { message, reply_to }: Envelope) {
        debug!(league = %message.league_id(), ?message, "routing message");
        let worker = self.worker.clone();

        match message {
            Message::FetchTeams { league_id, .. } => {
                tokio::spawn(async move {
                    let reply = match worker.fetch_teams(&league_id).await {
                        Ok(teams) => Reply::Teams { teams },
                        Err(_) => Reply::Error {
                            error: FETCH_TEAMS_FAILED.to_string(),
                        },
                    };
                    let _ = reply_to.send(Response::reply(reply));
                });
            }
            Message::UpdateLeague { league_id, .. } => {
                let (done_tx, done_rx) = oneshot::channel();
                tokio::spawn(async move {
                    let report = worker.refresh_league(&league_id).await;
                    // Nobody may be waiting; the store writes are what matter.
                    let _ = done_tx.send(report);
                });
                let _ = reply_to.send(Response {
                    reply: Reply::Status {
                        status: FETCH_INITIATED.to_string(),
                    },
                    completion: Some(done_rx),
                });
            }
        }
    }
}

/// Start a router task for `worker`.
pub fn spawn_router(worker: FetchWorker) -> (RouterHandle, JoinHandle<()>) {
    let (router, handle) = MessageRouter::new(worker);
    (handle, tokio::spawn(router.run()))
}
