use serde::{Deserialize, Serialize};

/// Item of the upstream `standings` endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub league: StandingsLeague,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsLeague {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub logo: String,
    pub flag: Option<String>,
    pub season: i64,
    /// One table per group; single-table leagues have exactly one entry
    #[serde(default)]
    pub standings: Vec<Vec<Standing>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub rank: i64,
    pub team: StandingTeam,
    pub points: i64,
    pub goals_diff: i64,
    pub group: Option<String>,
    pub form: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub all: Record,
    pub home: Record,
    pub away: Record,
    pub update: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingTeam {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub played: Option<i64>,
    pub win: Option<i64>,
    pub draw: Option<i64>,
    pub lose: Option<i64>,
    pub goals: RecordGoals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordGoals {
    #[serde(rename = "for")]
    pub scored: Option<i64>,
    pub against: Option<i64>,
}

/// Create request for `POST /league`
#[derive(Debug, Deserialize)]
pub struct CreateLeague {
    pub id: i64,
    pub season: i64,
}

/// League with its table, as stored in the `leagues` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub logo: String,
    pub flag: Option<String>,
    pub season: i64,
    pub standings: Vec<Standing>,
}

impl From<StandingsLeague> for League {
    /// Keeps only the first table; grouped competitions lose the rest.
    fn from(league: StandingsLeague) -> Self {
        let standings = league.standings.into_iter().next().unwrap_or_default();
        League {
            id: league.id,
            name: league.name,
            country: league.country,
            logo: league.logo,
            flag: league.flag,
            season: league.season,
            standings,
        }
    }
}

/// Row from the `leagues` table
#[derive(Debug, sqlx::FromRow)]
pub struct LeagueRow {
    pub id: i64,
    pub season: i64,
    pub name: String,
    pub country: String,
    pub logo: String,
    pub flag: Option<String>,
    pub standings: sqlx::types::Json<Vec<Standing>>,
    pub last_updated: Option<String>,
}

impl LeagueRow {
    pub fn to_league(&self) -> League {
        League {
            id: self.id,
            name: self.name.clone(),
            country: self.country.clone(),
            logo: self.logo.clone(),
            flag: self.flag.clone(),
            season: self.season,
            standings: self.standings.0.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDINGS_JSON: &str = r#"{"league":{"id":39,"name":"Premier League","country":"England",
        "logo":"pl.png","flag":"gb.svg","season":2023,"standings":[[{"rank":1,
        "team":{"id":50,"name":"Manchester City","logo":"city.png"},"points":91,"goalsDiff":62,
        "group":"Premier League","form":"WWWWW","status":"same","description":"Promotion - Champions League (Group Stage: )",
        "all":{"played":38,"win":28,"draw":7,"lose":3,"goals":{"for":96,"against":34}},
        "home":{"played":19,"win":14,"draw":5,"lose":0,"goals":{"for":51,"against":16}},
        "away":{"played":19,"win":14,"draw":2,"lose":3,"goals":{"for":45,"against":18}},
        "update":"2024-05-20T00:00:00+00:00"}]]}}"#;

    #[test]
    fn decodes_upstream_standings() {
        let rsp: StandingsResponse = serde_json::from_str(STANDINGS_JSON).expect("should decode");
        let table = &rsp.league.standings[0];
        assert_eq!(table[0].goals_diff, 62);
        assert_eq!(table[0].all.goals.scored, Some(96));
        assert_eq!(table[0].team.name, "Manchester City");
    }

    #[test]
    fn league_keeps_first_table_only() {
        let mut rsp: StandingsResponse = serde_json::from_str(STANDINGS_JSON).unwrap();
        let second = rsp.league.standings[0].clone();
        rsp.league.standings.push(second);

        let league = League::from(rsp.league);
        assert_eq!(league.standings.len(), 1);
        assert_eq!(league.season, 2023);
    }

    #[test]
    fn league_without_tables_has_empty_standings() {
        let json = r#"{"id":2,"name":"UEFA Champions League","country":"World","logo":"ucl.png","flag":null,"season":2023}"#;
        let league = League::from(serde_json::from_str::<StandingsLeague>(json).unwrap());
        assert!(league.standings.is_empty());
    }

    #[test]
    fn goals_for_keeps_upstream_name() {
        let goals = RecordGoals { scored: Some(3), against: Some(1) };
        let value = serde_json::to_value(&goals).unwrap();
        assert_eq!(value["for"], 3);
    }
}
