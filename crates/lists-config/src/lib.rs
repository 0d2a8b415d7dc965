//! # lists-config
//!
//! Layered configuration loading for superlists using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SUPERLISTS_*` prefix, `__` as separator)
//! 2. An explicit file passed on the command line (`--config`)
//! 3. Project-level `./superlists.toml`
//! 4. User-level `~/.config/superlists/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SUPERLISTS_SERVER__BIND_ADDR` -> `server.bind_addr` and
//! `SUPERLISTS_DATABASE__PATH` -> `database.path`.
//!
//! # Usage
//!
//! ```no_run
//! use lists_config::ListsConfig;
//!
//! let config = ListsConfig::load_with_dotenv(None).expect("config");
//! println!("listening on {}", config.server.bind_addr);
//! ```

mod database;
mod error;
mod server;

pub use database::{DatabaseConfig, IN_MEMORY};
pub use error::ConfigError;
pub use server::ServerConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SUPERLISTS_";

/// Project-local config file name, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "superlists.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListsConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl ListsConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed or a value has
    /// the wrong type.
    pub fn load(extra_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(extra_file).extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(extra_file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load(extra_file)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    #[must_use]
    pub fn figment(extra_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // An explicit file is expected to exist; figment reports it if not.
        if let Some(path) = extra_file {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("superlists").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ListsConfig::default();
        assert_eq!(config.server.bind_addr, "127.0.0.1:8000");
        assert_eq!(config.database.path, "superlists.db");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: ListsConfig = ListsConfig::figment(None).extract()?;
            assert_eq!(config.server.shutdown_grace_secs, 5);
            assert!(!config.database.is_in_memory());
            Ok(())
        });
    }
}
