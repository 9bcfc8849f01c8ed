use std::sync::Arc;

use axum::{Router, extract::FromRef, routing::get};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod routes;

use client::FootballApiClient;
use config::Config;

/// Shared handles for every request
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub api: FootballApiClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        AppState {
            pool,
            api: FootballApiClient::new(&config),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for FootballApiClient {
    fn from_ref(state: &AppState) -> Self {
        state.api.clone()
    }
}

pub fn app(state: AppState) -> Router {
    // CORS configuration for the web frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "Football Stats API - v1.0" }))
        .route("/health", get(routes::health::health_check))

        // Fixture endpoints (upstream only)
        .route("/fixtures/{id}", get(routes::fixtures::get_fixture_by_id))
        .route("/fixtures/h2h/{team1}/{team2}", get(routes::fixtures::get_head_to_head))
        .route("/fixtures/rounds/{id}", get(routes::fixtures::get_rounds))
        .route("/fixtures/rounds/{id}/{round}", get(routes::fixtures::get_fixtures_by_round))

        // Standings endpoints (upstream only)
        .route("/standings/{id}", get(routes::standings::get_standings_by_id))

        // League endpoints (stored)
        .route(
            "/league",
            get(routes::league::get_leagues).post(routes::league::create_league),
        )
        .route(
            "/league/{id}",
            get(routes::league::get_league_by_id).delete(routes::league::delete_league),
        )

        // Match endpoints (stored)
        .route("/match", get(routes::matches::get_matches))
        .route(
            "/match/{id}",
            get(routes::matches::get_match_by_id).delete(routes::matches::delete_match),
        )

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
