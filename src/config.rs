use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Dummy-data seeding settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub enabled: bool,
    pub team_count: usize,
    pub user_count: usize,
    /// Fixed RNG seed; `None` seeds from entropy
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            team_count: 4,
            user_count: 20,
            rng_seed: None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub graphiql_enabled: bool,
    pub seed: SeedConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            graphiql_enabled: true,
            seed: SeedConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment (and `.env`, if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    ///
    /// Unset keys fall back to the defaults; set but unparsable keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: parse_or(&lookup, "HOST", defaults.host)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            graphiql_enabled: parse_or(&lookup, "GRAPHIQL_ENABLED", defaults.graphiql_enabled)?,
            seed: SeedConfig {
                enabled: parse_or(&lookup, "SEED_DUMMY_DATA", defaults.seed.enabled)?,
                team_count: parse_or(&lookup, "SEED_TEAM_COUNT", defaults.seed.team_count)?,
                user_count: parse_or(&lookup, "SEED_USER_COUNT", defaults.seed.user_count)?,
                rng_seed: match lookup("SEED_RNG") {
                    Some(raw) => Some(parse_value("SEED_RNG", &raw)?),
                    None => None,
                },
            },
        })
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}
