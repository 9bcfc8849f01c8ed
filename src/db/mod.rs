use sqlx::sqlite::SqlitePool;
use sqlx::types::Json;
use crate::models::*;

/// Create the tables this service writes to, if they are missing.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS leagues (
               id INTEGER NOT NULL,
               season INTEGER NOT NULL,
               name TEXT NOT NULL,
               country TEXT NOT NULL,
               logo TEXT NOT NULL,
               flag TEXT,
               standings TEXT NOT NULL,
               last_updated TEXT,
               PRIMARY KEY (id, season)
           )"#
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS matches (
               fixture_id INTEGER PRIMARY KEY,
               league_id INTEGER NOT NULL,
               season INTEGER NOT NULL,
               data TEXT NOT NULL,
               last_updated TEXT
           )"#
    )
    .execute(pool)
    .await?;

    Ok(())
}

// League queries
pub async fn save_league(pool: &SqlitePool, league: &League) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO leagues (id, season, name, country, logo, flag, standings, last_updated)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?)
           ON CONFLICT (id, season) DO UPDATE SET
               name = excluded.name,
               country = excluded.country,
               logo = excluded.logo,
               flag = excluded.flag,
               standings = excluded.standings,
               last_updated = excluded.last_updated"#
    )
    .bind(league.id)
    .bind(league.season)
    .bind(&league.name)
    .bind(&league.country)
    .bind(&league.logo)
    .bind(&league.flag)
    .bind(Json(&league.standings))
    .bind(chrono::Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn find_league(
    pool: &SqlitePool,
    league_id: i64,
    season: i64,
) -> Result<Option<LeagueRow>, sqlx::Error> {
    sqlx::query_as::<_, LeagueRow>(
        r#"SELECT * FROM leagues WHERE id = ? AND season = ?"#
    )
    .bind(league_id)
    .bind(season)
    .fetch_optional(pool)
    .await
}

pub async fn find_all_leagues(pool: &SqlitePool) -> Result<Vec<LeagueRow>, sqlx::Error> {
    sqlx::query_as::<_, LeagueRow>(
        r#"SELECT * FROM leagues ORDER BY name, season DESC"#
    )
    .fetch_all(pool)
    .await
}

/// Delete every stored season of a league, returning how many rows went away
pub async fn delete_league(pool: &SqlitePool, league_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM leagues WHERE id = ?"#)
        .bind(league_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

// Match queries - normalized match payloads stored as JSON
pub async fn save_match(pool: &SqlitePool, game: &Match) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO matches (fixture_id, league_id, season, data, last_updated)
           VALUES (?, ?, ?, ?, ?)
           ON CONFLICT (fixture_id) DO UPDATE SET
               league_id = excluded.league_id,
               season = excluded.season,
               data = excluded.data,
               last_updated = excluded.last_updated"#
    )
    .bind(game.fixture.id)
    .bind(game.league.id)
    .bind(game.league.season)
    .bind(Json(game))
    .bind(chrono::Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn find_match(
    pool: &SqlitePool,
    fixture_id: i64,
) -> Result<Option<MatchRow>, sqlx::Error> {
    sqlx::query_as::<_, MatchRow>(
        r#"SELECT * FROM matches WHERE fixture_id = ?"#
    )
    .bind(fixture_id)
    .fetch_optional(pool)
    .await
}

pub async fn find_all_matches(pool: &SqlitePool) -> Result<Vec<MatchRow>, sqlx::Error> {
    sqlx::query_as::<_, MatchRow>(
        r#"SELECT * FROM matches ORDER BY fixture_id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn delete_match(pool: &SqlitePool, fixture_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM matches WHERE fixture_id = ?"#)
        .bind(fixture_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
