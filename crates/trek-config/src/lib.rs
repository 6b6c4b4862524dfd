//! # trek-config
//!
//! Layered configuration loading for Trek using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TREK_*` prefix, `__` as separator)
//! 2. Project-level `.trek/config.toml`
//! 3. User-level `~/.config/trek/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TREK_VALIDATION__ALLOW_OVERLAPS` -> `validation.allow_overlaps`,
//! `TREK_STORAGE__DATA_FILE` -> `storage.data_file`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use trek_config::TrekConfig;
//!
//! let config = TrekConfig::load_with_dotenv().expect("config");
//!
//! if config.validation.allow_overlaps {
//!     println!("overlapping trips are accepted silently");
//! }
//! ```

mod display;
mod error;
mod storage;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use storage::StorageConfig;
pub use trek_core::settings::ValidationSettings;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrekConfig {
    #[serde(default)]
    pub validation: ValidationSettings,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl TrekConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value has the
    /// wrong type or an invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after applying `.env` from the current directory.
    ///
    /// Variables already set in the process keep their values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Dotenv` if `.env` exists but cannot be parsed,
    /// otherwise the same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv(Path::new(".env"))?;
        Self::load()
    }

    /// Apply the dotenv file at `path`. Returns `false` when there is none.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Dotenv` if the file cannot be read or parsed.
    pub fn load_dotenv(path: &Path) -> Result<bool, ConfigError> {
        if !path.exists() {
            return Ok(false);
        }
        dotenvy::from_path(path).map_err(|source| ConfigError::Dotenv {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(true)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".trek/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("TREK_").split("__"));

        figment
    }

    /// Reject values the validation pipeline cannot work with.
    ///
    /// Unknown date format names are accepted here; they fall back to a
    /// default format at display time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let validation = &self.validation;
        if validation.max_location_length == 0 {
            return Err(invalid(
                "validation.max_location_length",
                "must be greater than zero",
            ));
        }
        if validation.max_comment_length == 0 {
            return Err(invalid(
                "validation.max_comment_length",
                "must be greater than zero",
            ));
        }
        if validation.future_warning_days < 0 {
            return Err(invalid(
                "validation.future_warning_days",
                "must not be negative",
            ));
        }
        if validation.past_warning_days < 0 {
            return Err(invalid(
                "validation.past_warning_days",
                "must not be negative",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("trek").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
