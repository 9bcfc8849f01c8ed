use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{ApiEnvelope, MatchDto, StandingsResponse};

const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Client for the upstream football statistics API.
///
/// Cheap to clone: the underlying [`reqwest::Client`] is reference counted.
#[derive(Debug, Clone)]
pub struct FootballApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FootballApiClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Use a preconfigured [`reqwest::Client`], e.g. with timeouts or a proxy.
    pub fn with_client(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.football_api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// GET `endpoint` and unwrap the `response` list of the envelope.
    ///
    /// `None` means upstream omitted the list entirely (or sent `null`).
    pub async fn get_response<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Option<Vec<T>>, ApiError> {
        let url = self.url(endpoint);
        let before = Instant::now();

        let rsp = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let envelope: ApiEnvelope<T> = rsp.json().await?;
        tracing::info!("[REST] Call {} {:?} {:.2?}", url, query, before.elapsed());

        Ok(envelope.response)
    }

    pub async fn fixture_by_id(&self, fixture_id: i64) -> Result<Option<Vec<MatchDto>>, ApiError> {
        self.get_response("fixtures", &[("id", fixture_id.to_string())])
            .await
    }

    pub async fn head_to_head(
        &self,
        team1: i64,
        team2: i64,
    ) -> Result<Option<Vec<MatchDto>>, ApiError> {
        self.get_response("fixtures/headtohead", &[("h2h", format!("{team1}-{team2}"))])
            .await
    }

    pub async fn rounds(
        &self,
        league_id: i64,
        season: i64,
    ) -> Result<Option<Vec<String>>, ApiError> {
        self.get_response(
            "fixtures/rounds",
            &[("league", league_id.to_string()), ("season", season.to_string())],
        )
        .await
    }

    pub async fn fixtures_by_round(
        &self,
        league_id: i64,
        season: i64,
        round: &str,
    ) -> Result<Option<Vec<MatchDto>>, ApiError> {
        self.get_response(
            "fixtures",
            &[
                ("league", league_id.to_string()),
                ("season", season.to_string()),
                ("round", round.to_string()),
            ],
        )
        .await
    }

    pub async fn standings(
        &self,
        league_id: i64,
        season: i64,
    ) -> Result<Option<Vec<StandingsResponse>>, ApiError> {
        self.get_response(
            "standings",
            &[("league", league_id.to_string()), ("season", season.to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> FootballApiClient {
        let config = Config::from_lookup(|name| match name {
            "API_KEY" => Some("key".to_string()),
            "FOOTBALL_API_URL" => Some(base.to_string()),
            _ => None,
        })
        .unwrap();
        FootballApiClient::new(&config)
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let api = client("https://v3.football.api-sports.io/");
        assert_eq!(api.url("fixtures"), "https://v3.football.api-sports.io/fixtures");
        assert_eq!(
            api.url("/fixtures/headtohead"),
            "https://v3.football.api-sports.io/fixtures/headtohead"
        );
    }
}
