use std::net::{Ipv4Addr, SocketAddr};

const DEFAULT_API_URL: &str = "https://v3.football.api-sports.io";
const DEFAULT_DATABASE_URL: &str = "sqlite://football.db?mode=rwc";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in .env")]
    Missing(&'static str),
    #[error("{name} is not in the correct format: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings for the server and the upstream football API.
#[derive(Debug, Clone)]
pub struct Config {
    pub football_api_url: String,
    pub api_key: String,
    pub database_url: String,
    pub host: Ipv4Addr,
    pub port: u16,
    /// Season used when a request does not pass `?season=`
    pub default_season: i64,
}

impl Config {
    /// Read settings from the process environment. Call `dotenvy::dotenv()` first
    /// if a `.env` file should be honored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("API_KEY"))?;

        let football_api_url = lookup("FOOTBALL_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            football_api_url,
            api_key,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: parse_or("HOST", lookup("HOST"), Ipv4Addr::LOCALHOST)?,
            port: parse_or("PORT", lookup("PORT"), 3000)?,
            default_season: parse_or("DEFAULT_SEASON", lookup("DEFAULT_SEASON"), 2023)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.football_api_url, DEFAULT_API_URL);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.addr(), SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.default_season, 2023);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("API_KEY")));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_KEY", "secret"),
            ("FOOTBALL_API_URL", "http://localhost:9000/"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DEFAULT_SEASON", "2021"),
        ]))
        .unwrap();
        assert_eq!(config.football_api_url, "http://localhost:9000");
        assert_eq!(config.addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.default_season, 2021);
    }

    #[test]
    fn default_season_fills_missing_query_season() {
        let config = Config::from_lookup(lookup_from(&[("API_KEY", "secret")])).unwrap();
        let requested: Option<i64> = None;
        assert_eq!(requested.unwrap_or(config.default_season), 2023);
        assert_eq!(Some(2019).unwrap_or(config.default_season), 2019);
    }

    #[test]
    fn malformed_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("API_KEY", "secret"), ("PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }
}
