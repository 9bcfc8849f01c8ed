use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::models::{CreateLeague, League};
use crate::routes::SeasonQuery;
use crate::AppState;

/// Stored league for `(league_id, season)`, fetching and storing it on first use.
///
/// Upstream answering with no standings at all is reported as `NotAcceptable`.
async fn find_or_fetch_league(
    state: &AppState,
    league_id: i64,
    season: i64,
) -> Result<League, ApiError> {
    if let Some(row) = db::find_league(&state.pool, league_id, season).await? {
        return Ok(row.to_league());
    }

    let league: League = state
        .api
        .standings(league_id, season)
        .await?
        .and_then(|standings| standings.into_iter().next())
        .map(|s| s.league.into())
        .ok_or(ApiError::NotAcceptable)?;

    db::save_league(&state.pool, &league).await?;
    tracing::info!("Stored league {} season {}", league.id, league.season);

    Ok(league)
}

// POST /league - Store a league season, or return the stored one
pub async fn create_league(
    State(state): State<AppState>,
    Json(body): Json<CreateLeague>,
) -> Result<Json<League>, ApiError> {
    let league = find_or_fetch_league(&state, body.id, body.season).await?;
    Ok(Json(league))
}

// GET /league - List all stored leagues
pub async fn get_leagues(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<League>>, ApiError> {
    let leagues = db::find_all_leagues(&pool)
        .await?
        .iter()
        .map(|row| row.to_league())
        .collect();

    Ok(Json(leagues))
}

// GET /league/{id}?season=2023 - Get a league season, fetching it if needed
pub async fn get_league_by_id(
    State(state): State<AppState>,
    Path(league_id): Path<i64>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<League>, ApiError> {
    let season = params.season.unwrap_or(state.config.default_season);
    let league = find_or_fetch_league(&state, league_id, season).await?;
    Ok(Json(league))
}

// DELETE /league/{id} - Remove every stored season of a league
pub async fn delete_league(
    State(pool): State<SqlitePool>,
    Path(league_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if db::delete_league(&pool, league_id).await? == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
