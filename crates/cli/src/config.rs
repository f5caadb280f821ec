//! Report configuration layered from the environment.

use std::env;
use std::path::PathBuf;

use bulk_core::{BulkConfig, Size};

/// Carrier and data-source settings for a report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub actor_size: Size,
    pub strength: i32,
    pub bonus_limit: i32,
    pub bonus_encumbered: i32,
    /// Overrides `config.toml` when set.
    pub ignore_coin_bulk: Option<bool>,
    /// Overrides `config.toml` when set.
    pub ignore_container_overflow: Option<bool>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            actor_size: Size::Medium,
            strength: 0,
            bonus_limit: 0,
            bonus_encumbered: 0,
            ignore_coin_bulk: None,
            ignore_container_overflow: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BULK_DATA_DIR` - Directory holding inventory data (default: data)
    /// - `BULK_ACTOR_SIZE` - Carrier size category (default: medium)
    /// - `BULK_STRENGTH_MOD` - Carrier strength modifier (default: 0)
    /// - `BULK_BONUS_LIMIT` - Bonus to the maximum Bulk (default: 0)
    /// - `BULK_BONUS_ENCUMBERED` - Bonus to the encumbered threshold (default: 0)
    /// - `BULK_IGNORE_COIN_BULK` - Coins weigh nothing (default: from config.toml)
    /// - `BULK_IGNORE_CONTAINER_OVERFLOW` - Keep partial stacks inside containers
    ///   (default: from config.toml)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("BULK_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(size) = read_env::<Size>("BULK_ACTOR_SIZE") {
            config.actor_size = size;
        }
        if let Some(strength) = read_env::<i32>("BULK_STRENGTH_MOD") {
            config.strength = strength;
        }
        if let Some(bonus) = read_env::<i32>("BULK_BONUS_LIMIT") {
            config.bonus_limit = bonus;
        }
        if let Some(bonus) = read_env::<i32>("BULK_BONUS_ENCUMBERED") {
            config.bonus_encumbered = bonus;
        }
        config.ignore_coin_bulk = read_env_bool("BULK_IGNORE_COIN_BULK");
        config.ignore_container_overflow = read_env_bool("BULK_IGNORE_CONTAINER_OVERFLOW");

        config
    }

    /// Applies the environment overrides on top of a loaded configuration.
    pub fn bulk_config(&self, loaded: BulkConfig) -> BulkConfig {
        BulkConfig {
            ignore_coin_bulk: self.ignore_coin_bulk.unwrap_or(loaded.ignore_coin_bulk),
            ignore_container_overflow: self
                .ignore_container_overflow
                .unwrap_or(loaded.ignore_container_overflow),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
