pub mod fixtures;
pub mod health;
pub mod league;
pub mod matches;
pub mod standings;

use serde::Deserialize;

/// `?season=` filter shared by the league, round and standings endpoints
#[derive(Debug, Deserialize)]
pub struct SeasonQuery {
    #[serde(default)]
    pub season: Option<i64>,
}
