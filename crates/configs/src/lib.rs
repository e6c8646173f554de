//! # configs
//!
//! Layered settings for the gamification core: built-in defaults, then an
//! optional `gamification.toml`, then `GAMIFY__SECTION__KEY` environment
//! variables (a `.env` file is read first if present).

use config::{Config, Environment, File, FileFormat};
use domains::{LeaderboardLimits, ReputationWeights};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_CONFIG_FILE: &str = "gamification.toml";
pub const ENV_PREFIX: &str = "GAMIFY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to initialise tracing: {0}")]
    Tracing(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set
    pub filter: String,
    /// Emit JSON lines instead of the human-readable format
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub weights: ReputationWeights,
    pub leaderboard: LeaderboardLimits,
    pub log: LogSettings,
}

impl Settings {
    /// Loads `.env`, `gamification.toml` (optional) and `GAMIFY__*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings: Settings = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        info!(
            fetch_limit = settings.leaderboard.fetch_limit,
            compact_limit = settings.leaderboard.compact_limit,
            full_limit = settings.leaderboard.full_limit,
            "configuration loaded"
        );
        Ok(settings)
    }

    /// Defaults overlaid with a TOML document. No file or env lookup.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.leaderboard;
        if limits.fetch_limit == 0 || limits.compact_limit == 0 || limits.full_limit == 0 {
            return Err(ConfigError::Invalid(
                "leaderboard limits must be greater than zero".to_string(),
            ));
        }
        if limits.compact_limit > limits.full_limit {
            return Err(ConfigError::Invalid(format!(
                "leaderboard.compact_limit ({}) exceeds leaderboard.full_limit ({})",
                limits.compact_limit, limits.full_limit
            )));
        }
        Ok(())
    }
}

/// Installs the global tracing subscriber. Fails if one is already set.
pub fn init_tracing(log: &LogSettings) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.filter))
        .map_err(|err| ConfigError::Tracing(err.to_string()))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|err| ConfigError::Tracing(err.to_string()))
}
