use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::models::Match;
use crate::normalizer;
use crate::AppState;

// GET /match - List all stored matches
pub async fn get_matches(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let matches = db::find_all_matches(&pool)
        .await?
        .into_iter()
        .map(|row| row.into_match())
        .collect();

    Ok(Json(matches))
}

// GET /match/{id} - Stored match, or fetch, normalize and store it
pub async fn get_match_by_id(
    State(state): State<AppState>,
    Path(fixture_id): Path<i64>,
) -> Result<Json<Match>, ApiError> {
    if let Some(row) = db::find_match(&state.pool, fixture_id).await? {
        return Ok(Json(row.into_match()));
    }

    let fixture = state
        .api
        .fixture_by_id(fixture_id)
        .await?
        .and_then(|fixtures| fixtures.into_iter().next())
        .ok_or(ApiError::NotFound)?;

    let game = normalizer::normalize_match(fixture);
    db::save_match(&state.pool, &game).await?;
    tracing::info!("Stored match {}", game.fixture.id);

    Ok(Json(game))
}

// DELETE /match/{id} - Remove a stored match
pub async fn delete_match(
    State(pool): State<SqlitePool>,
    Path(fixture_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if db::delete_match(&pool, fixture_id).await? == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
