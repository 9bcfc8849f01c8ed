//! Reshapes upstream fixture payloads into the structures the frontend consumes.
//!
//! Everything here is synchronous and free of I/O; handlers call into it after the
//! upstream response has been decoded and before anything is persisted.

use std::collections::HashMap;

use chrono_tz::Tz;
use lazy_static::lazy_static;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ApiError;
use crate::models::{
    Lineup, Lineups, Match, MatchDto, MatchEvent, MatchEvents, StatValue, Statistic, TeamStatistics,
    Teams,
};

/// Number of head-to-head fixtures returned by default
pub const HEAD_TO_HEAD_LIMIT: usize = 5;

lazy_static! {
    static ref STAT_NUMBER: Regex = Regex::new(r"-?\d+").expect("statistic pattern is valid");
}

/// Fixtures of a round grouped under a short date label, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FixtureGroups {
    groups: Vec<(String, Vec<MatchDto>)>,
}

#[cfg(test)]
impl FixtureGroups {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(label, _)| label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&[MatchDto]> {
        self.groups
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, fixtures)| fixtures.as_slice())
    }
}

impl Serialize for FixtureGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (label, fixtures) in &self.groups {
            map.serialize_entry(label, fixtures)?;
        }
        map.end()
    }
}

/// Pair both teams' events into one timeline keyed by elapsed minute.
///
/// Minutes appear in the order they are first seen. Within a minute the last event
/// of each side wins; events of a team that is neither side fill no slot.
pub fn merge_team_events(
    events: Vec<MatchEvent>,
    home_team_id: i64,
    away_team_id: i64,
) -> Vec<MatchEvents> {
    let mut timeline: Vec<MatchEvents> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for event in events {
        let minute = event.time.elapsed;
        let slot = *index.entry(minute).or_insert_with(|| {
            timeline.push(MatchEvents {
                timestamp: minute.to_string(),
                home: None,
                away: None,
            });
            timeline.len() - 1
        });

        let entry = &mut timeline[slot];
        if event.team.id == home_team_id {
            entry.home = Some(event);
        } else if event.team.id == away_team_id {
            entry.away = Some(event);
        }
    }

    timeline
}

/// Pair two teams' statistics by position into home/away values.
///
/// Returns an empty list unless there are exactly two teams reporting the same
/// number of entries. Names come from the first team.
pub fn pair_statistics(teams: &[TeamStatistics]) -> Vec<Statistic> {
    let [home, away] = teams else {
        return Vec::new();
    };
    if home.statistics.len() != away.statistics.len() {
        return Vec::new();
    }

    home.statistics
        .iter()
        .zip(&away.statistics)
        .map(|(h, a)| Statistic {
            name: h.kind.clone(),
            home: h.value.as_ref().and_then(parse_stat_value),
            away: a.value.as_ref().and_then(parse_stat_value),
            is_percentage: matches!(h.value, Some(StatValue::Text(_))),
        })
        .collect()
}

/// Integer part of a statistic value. Text such as `"32%"` yields its first run of digits.
pub fn parse_stat_value(value: &StatValue) -> Option<i64> {
    match value {
        StatValue::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        StatValue::Text(text) => STAT_NUMBER.find(text)?.as_str().parse().ok(),
    }
}

/// Short `MM/DD/YY` label of a fixture's kick-off in its own timezone
pub fn fixture_date_label(fixture: &MatchDto) -> String {
    let tz: Tz = fixture.fixture.timezone.parse().unwrap_or_else(|_| {
        tracing::debug!(
            "Unknown timezone {} for fixture {}, using UTC",
            fixture.fixture.timezone,
            fixture.fixture.id
        );
        Tz::UTC
    });

    fixture.fixture.date.with_timezone(&tz).format("%m/%d/%y").to_string()
}

/// Group fixtures by their local date label, keeping input order inside each group.
pub fn group_fixtures_by_date(fixtures: Vec<MatchDto>) -> FixtureGroups {
    let mut grouped = FixtureGroups::default();
    let mut index: HashMap<String, usize> = HashMap::new();

    for fixture in fixtures {
        let label = fixture_date_label(&fixture);
        match index.get(&label) {
            Some(&i) => grouped.groups[i].1.push(fixture),
            None => {
                index.insert(label.clone(), grouped.groups.len());
                grouped.groups.push((label, vec![fixture]));
            }
        }
    }

    grouped
}

/// The `limit` most recent fixtures, oldest first.
///
/// `None` means upstream sent no list at all and is reported as not found; an empty
/// list is a valid answer for teams that never met.
pub fn select_recent_head_to_head(
    fixtures: Option<Vec<MatchDto>>,
    limit: usize,
) -> Result<Vec<MatchDto>, ApiError> {
    let mut fixtures = fixtures.ok_or(ApiError::NotFound)?;
    fixtures.sort_by_key(|f| f.fixture.timestamp);

    let skip = fixtures.len().saturating_sub(limit);
    Ok(fixtures.split_off(skip))
}

/// Build the frontend match view from a raw fixture payload.
pub fn normalize_match(dto: MatchDto) -> Match {
    let home_id = dto.teams.home.id;
    let away_id = dto.teams.away.id;

    let events = merge_team_events(dto.events.unwrap_or_default(), home_id, away_id);

    let mut statistics = dto.statistics.unwrap_or_default();
    ensure_home_first(statistics.as_mut_slice(), &dto.teams, |s| s.team.id, "statistics");

    let mut lineups = dto.lineups.unwrap_or_default();
    ensure_home_first(lineups.as_mut_slice(), &dto.teams, |l| l.team.id, "lineups");

    Match {
        events,
        statistics: pair_statistics(&statistics),
        lineups: pair_lineups(lineups),
        players: dto.players.unwrap_or_default(),
        fixture: dto.fixture,
        league: dto.league,
        teams: dto.teams,
        goals: dto.goals,
        score: dto.score,
    }
}

fn pair_lineups(lineups: Vec<Lineup>) -> Lineups {
    let mut sides = lineups.into_iter();
    Lineups {
        home: sides.next(),
        away: sides.next(),
    }
}

// Upstream lists the home side first; swap when team ids say otherwise.
fn ensure_home_first<T>(sides: &mut [T], teams: &Teams, team_id: impl Fn(&T) -> i64, what: &str) {
    if sides.len() == 2
        && team_id(&sides[0]) == teams.away.id
        && team_id(&sides[1]) == teams.home.id
    {
        tracing::warn!("Upstream {} listed away team {} first, swapping", what, teams.away.id);
        sides.swap(0, 1);
    }
}
