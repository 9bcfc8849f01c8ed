use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

mod standings;

pub use standings::*;

/// Envelope every upstream endpoint wraps its payload in
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub response: Option<Vec<T>>,
}

/// One fixture as returned by the upstream fixtures endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDto {
    pub fixture: FixtureInfo,
    pub league: LeagueInfo,
    pub teams: Teams,
    pub goals: Goals,
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<MatchEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineups: Option<Vec<Lineup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Vec<TeamStatistics>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<TeamPlayers>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureInfo {
    pub id: i64,
    pub referee: Option<String>,
    pub timezone: String,
    pub date: DateTime<FixedOffset>,
    pub timestamp: i64,
    #[serde(default)]
    pub periods: Periods,
    #[serde(default)]
    pub venue: Venue,
    pub status: FixtureStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Periods {
    pub first: Option<i64>,
    pub second: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Venue {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureStatus {
    pub long: String,
    pub short: String,
    pub elapsed: Option<i64>,
    #[serde(default)]
    pub extra: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueInfo {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub logo: String,
    pub flag: Option<String>,
    pub season: i64,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standings: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teams {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    pub home: Option<i64>,
    pub away: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub halftime: Goals,
    #[serde(default)]
    pub fulltime: Goals,
    #[serde(default)]
    pub extratime: Goals,
    #[serde(default)]
    pub penalty: Goals,
}

/// A single in-game occurrence: goal, card, substitution, VAR decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub time: EventTime,
    pub team: Team,
    pub player: EventPlayer,
    #[serde(default)]
    pub assist: EventPlayer,
    #[serde(rename = "type")]
    pub kind: String,
    pub detail: String,
    #[serde(default)]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTime {
    pub elapsed: i64,
    #[serde(default)]
    pub extra: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPlayer {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub team: Team,
    #[serde(default)]
    pub coach: Option<Coach>,
    pub formation: Option<String>,
    #[serde(rename = "startXI", default)]
    pub start_xi: Vec<LineupSlot>,
    #[serde(default)]
    pub substitutes: Vec<LineupSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coach {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupSlot {
    pub player: LineupPlayer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupPlayer {
    pub id: Option<i64>,
    pub name: String,
    pub number: Option<i64>,
    pub pos: Option<String>,
    #[serde(default)]
    pub grid: Option<String>,
}

/// One team's statistics block, in the order upstream reports them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStatistics {
    pub team: Team,
    pub statistics: Vec<StatisticEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Option<StatValue>,
}

/// Upstream reports counts as numbers and ratios as strings such as `"32%"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamPlayers {
    pub team: Team,
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub player: PlayerProfile,
    #[serde(default)]
    pub statistics: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Events of both teams that happened in the same elapsed minute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvents {
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<MatchEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away: Option<MatchEvent>,
}

/// A statistic with both teams' values side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub name: String,
    pub home: Option<i64>,
    pub away: Option<i64>,
    pub is_percentage: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lineups {
    pub home: Option<Lineup>,
    pub away: Option<Lineup>,
}

/// Match details as served to the frontend and stored in the `matches` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub fixture: FixtureInfo,
    pub league: LeagueInfo,
    pub teams: Teams,
    pub goals: Goals,
    pub score: Score,
    pub events: Vec<MatchEvents>,
    pub lineups: Lineups,
    pub statistics: Vec<Statistic>,
    pub players: Vec<TeamPlayers>,
}

/// Row from the `matches` table
#[derive(Debug, sqlx::FromRow)]
pub struct MatchRow {
    pub fixture_id: i64,
    pub league_id: i64,
    pub season: i64,
    pub data: sqlx::types::Json<Match>,
    pub last_updated: Option<String>,
}

impl MatchRow {
    pub fn into_match(self) -> Match {
        self.data.0
    }
}
