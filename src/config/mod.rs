//! Match configuration from the environment, overridden by flags.
mod args;
mod error;

pub use args::*;
pub use error::*;

use crate::*;
use std::str::FromStr;

/// Resolved settings shared by both binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: Option<String>,
    pub port: u16,
    pub games: usize,
    pub seed: Option<u64>,
    pub json: bool,
}

impl Config {
    /// Flags first, then the process environment.
    pub fn from_env(args: Args) -> Result<Self, ConfigError> {
        Self::from_lookup(args, |key| std::env::var(key).ok())
    }

    /// Flags first, then `lookup`. PORT is checked before GAMES.
    pub fn from_lookup<F>(args: Args, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match args.port {
            Some(port) => port,
            None => required(ENV_PORT, &lookup)?,
        };
        let games = match args.games {
            Some(games) => games,
            None => required(ENV_GAMES, &lookup)?,
        };
        if games == 0 {
            return Err(ConfigError::Invalid {
                key: ENV_GAMES,
                value: games.to_string(),
            });
        }
        let host = args.host.or_else(|| lookup(ENV_HOST));
        let seed = match args.seed {
            Some(seed) => Some(seed),
            None => optional(ENV_SEED, &lookup)?,
        };
        Ok(Self {
            host,
            port,
            games,
            seed,
            json: args.json,
        })
    }

    /// Address the listening side binds.
    pub fn bind(&self) -> String {
        format!("{}:{}", self.host.as_deref().unwrap_or(BIND_HOST), self.port)
    }
    /// Address the connecting side dials.
    pub fn peer(&self) -> String {
        format!("{}:{}", self.host.as_deref().unwrap_or(PEER_HOST), self.port)
    }
}

fn optional<T, F>(key: &'static str, lookup: &F) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn required<T, F>(key: &'static str, lookup: &F) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    optional(key, lookup)?.ok_or(ConfigError::Missing(key))
}
