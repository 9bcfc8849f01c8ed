use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use crate::client::FootballApiClient;
use crate::error::ApiError;
use crate::models::{Match, MatchDto};
use crate::normalizer::{self, FixtureGroups, HEAD_TO_HEAD_LIMIT};
use crate::routes::SeasonQuery;
use crate::AppState;

// GET /fixtures/{id} - Normalized fixture details, straight from upstream
pub async fn get_fixture_by_id(
    State(api): State<FootballApiClient>,
    Path(fixture_id): Path<i64>,
) -> Result<Json<Match>, ApiError> {
    let fixture = api
        .fixture_by_id(fixture_id)
        .await?
        .and_then(|fixtures| fixtures.into_iter().next())
        .ok_or(ApiError::NotFound)?;

    Ok(Json(normalizer::normalize_match(fixture)))
}

// GET /fixtures/h2h/{team1}/{team2} - Most recent meetings of two teams, oldest first
pub async fn get_head_to_head(
    State(api): State<FootballApiClient>,
    Path((team1, team2)): Path<(i64, i64)>,
) -> Result<Json<Vec<MatchDto>>, ApiError> {
    let fixtures = api.head_to_head(team1, team2).await?;
    let recent = normalizer::select_recent_head_to_head(fixtures, HEAD_TO_HEAD_LIMIT)?;

    Ok(Json(recent))
}

// GET /fixtures/rounds/{id}?season=2023 - Round names of a league season
pub async fn get_rounds(
    State(state): State<AppState>,
    Path(league_id): Path<i64>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let season = params.season.unwrap_or(state.config.default_season);
    let rounds = state
        .api
        .rounds(league_id, season)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(rounds))
}

// GET /fixtures/rounds/{id}/{round}?season=2023 - Fixtures of one round grouped by date
pub async fn get_fixtures_by_round(
    State(state): State<AppState>,
    Path((league_id, round)): Path<(i64, String)>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<FixtureGroups>, ApiError> {
    let season = params.season.unwrap_or(state.config.default_season);
    let fixtures = state
        .api
        .fixtures_by_round(league_id, season, &round)
        .await?
        .filter(|fixtures| !fixtures.is_empty())
        .ok_or(ApiError::NotFound)?;

    Ok(Json(normalizer::group_fixtures_by_date(fixtures)))
}
