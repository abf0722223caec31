//! HTTP proxy in front of the upstream API
//!
//! Forwards the four per-league resources so the API key stays on the
//! server. Bodies are passed through untouched; any failure becomes a `500`
//! with a fixed error message for that resource.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::{future::Future, net::SocketAddr};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::{football_data::FootballDataClient, LeagueId, ResourceType, Result};


/// Shared state for proxy handlers.
#[derive(Clone)]
pub struct ProxyState {
    pub client: FootballDataClient,
}

/// Error body text for a failed forward.
pub fn failure_message(resource: ResourceType) -> &'static str {
    match resource {
        ResourceType::PastResults => "Failed to fetch past results",
        ResourceType::UpcomingFixtures => "Failed to fetch upcoming fixtures",
        ResourceType::LeagueTable => "Failed to fetch league table",
        ResourceType::Teams => "Failed to fetch teams",
    }
}

pub fn router(client: FootballDataClient) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/pastResults/:league_id", get(past_results))
        .route("/api/upcomingFixtures/:league_id", get(upcoming_fixtures))
        .route("/api/leagueTable/:league_id", get(league_table))
        .route("/api/teams/:league_id", get(teams))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(ProxyState { client })
}

/// Bind `addr` and serve until `shutdown` resolves.
pub async fn serve<F>(client: FootballDataClient, addr: SocketAddr, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, upstream = client.base_url(), "proxy listening");
    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("proxy stopped");
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn past_results(state: State<ProxyState>, league_id: Path<String>) -> Response {
    forward(state, league_id, ResourceType::PastResults).await
}

async fn upcoming_fixtures(state: State<ProxyState>, league_id: Path<String>) -> Response {
    forward(state, league_id, ResourceType::UpcomingFixtures).await
}

async fn league_table(state: State<ProxyState>, league_id: Path<String>) -> Response {
    forward(state, league_id, ResourceType::LeagueTable).await
}

async fn teams(state: State<ProxyState>, league_id: Path<String>) -> Response {
    forward(state, league_id, ResourceType::Teams).await
}

async fn forward(
    State(state): State<ProxyState>,
    Path(raw_league): Path<String>,
    resource: ResourceType,
) -> Response {
    let fetched = match LeagueId::new(raw_league) {
        Ok(league_id) => state.client.get_resource(&league_id, resource).await,
        Err(e) => Err(e),
    };

    match fetched {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            error!(error = %e, "error fetching {}", resource.label());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": failure_message(resource) })),
            )
                .into_response()
        }
    }
}
