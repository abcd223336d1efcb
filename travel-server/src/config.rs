//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::cache::CacheConfig;
use crate::planner::SearchConfig;

const ADDR_VAR: &str = "TRAVEL_ADDR";
const DB_VAR: &str = "TRAVEL_DB";
const STATIC_DIR_VAR: &str = "TRAVEL_STATIC_DIR";
const SEED_VAR: &str = "TRAVEL_SEED";
const MAX_EXPANSIONS_VAR: &str = "TRAVEL_MAX_EXPANSIONS";
const CACHE_TTL_VAR: &str = "TRAVEL_PLAN_CACHE_TTL_SECS";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DB: &str = "travel_planner.db";
const DEFAULT_STATIC_DIR: &str = "static";

/// A configuration variable held a value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

impl ConfigError {
    fn new(var: &'static str, value: &str, reason: impl ToString) -> Self {
        Self {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    InMemory,
}

/// Which built-in dataset to load into an empty database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// The twenty named cities.
    World,
    /// `n` generated cities joined in a chain.
    Synthetic(usize),
    /// Leave the database as it is.
    None,
}

impl SeedSource {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "world" => Ok(Self::World),
            "none" => Ok(Self::None),
            other => {
                let count = other
                    .strip_prefix("synthetic:")
                    .ok_or_else(|| {
                        ConfigError::new(SEED_VAR, value, "expected world, none or synthetic:<n>")
                    })?
                    .parse::<usize>()
                    .map_err(|e| ConfigError::new(SEED_VAR, value, e))?;
                Ok(Self::Synthetic(count))
            }
        }
    }
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub database: DatabaseLocation,
    pub static_dir: PathBuf,
    pub seed: SeedSource,
    pub search: SearchConfig,
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// or `None` if it is unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let addr_raw = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::new(ADDR_VAR, &addr_raw, e))?;

        let database = match get(DB_VAR).as_deref() {
            Some(":memory:") => DatabaseLocation::InMemory,
            Some(path) => DatabaseLocation::File(PathBuf::from(path)),
            None => DatabaseLocation::File(PathBuf::from(DEFAULT_DB)),
        };

        let static_dir =
            PathBuf::from(get(STATIC_DIR_VAR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()));

        let seed = match get(SEED_VAR) {
            Some(value) => SeedSource::parse(&value)?,
            None => SeedSource::World,
        };

        let mut search = SearchConfig::default();
        if let Some(value) = get(MAX_EXPANSIONS_VAR) {
            let limit = value
                .parse::<usize>()
                .map_err(|e| ConfigError::new(MAX_EXPANSIONS_VAR, &value, e))?;
            if limit == 0 {
                return Err(ConfigError::new(MAX_EXPANSIONS_VAR, &value, "must be positive"));
            }
            search = search.with_max_expansions(limit);
        }

        let mut cache = CacheConfig::default();
        if let Some(value) = get(CACHE_TTL_VAR) {
            let secs = value
                .parse::<u64>()
                .map_err(|e| ConfigError::new(CACHE_TTL_VAR, &value, e))?;
            cache.ttl = Duration::from_secs(secs);
        }

        Ok(Self {
            addr,
            database,
            static_dir,
            seed,
            search,
            cache,
        })
    }
}
