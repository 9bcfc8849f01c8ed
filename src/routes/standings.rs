use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use crate::error::ApiError;
use crate::models::StandingsLeague;
use crate::routes::SeasonQuery;
use crate::AppState;

// GET /standings/{id}?season=2023 - League tables as upstream reports them, not stored
pub async fn get_standings_by_id(
    State(state): State<AppState>,
    Path(league_id): Path<i64>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<StandingsLeague>, ApiError> {
    let season = params.season.unwrap_or(state.config.default_season);
    let league = state
        .api
        .standings(league_id, season)
        .await?
        .and_then(|standings| standings.into_iter().next())
        .map(|s| s.league)
        .ok_or(ApiError::NotFound)?;

    Ok(Json(league))
}
