//! # iron-config
//!
//! Layered configuration loading for Ironclad using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`IRONCLAD_*` prefix, `__` as separator)
//! 2. An explicit TOML file passed by the caller (e.g. `--config`)
//! 3. Project-level `.ironclad/config.toml`
//! 4. User-level `~/.config/ironclad/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `IRONCLAD_AUDIT__AT_RISK_THRESHOLD_PERCENT` ->
//! `audit.at_risk_threshold_percent`, `IRONCLAD_GENERAL__DEFAULT_FORMAT` ->
//! `general.default_format`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use iron_config::IroncladConfig;
//!
//! let config = IroncladConfig::load_with_dotenv().expect("config");
//! println!("at-risk below {}%", config.audit.at_risk_threshold_percent);
//! ```

mod error;
mod general;

pub use error::ConfigError;
pub use general::{GeneralConfig, KNOWN_FORMATS};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use iron_core::errors::AuditError;
use iron_core::policy::AuditPolicy;
use serde::{Deserialize, Serialize};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "IRONCLAD_";

/// Project-local config path, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".ironclad/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct IroncladConfig {
    #[serde(default)]
    pub audit: AuditPolicy,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl IroncladConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if the merged values are out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering `extra` above the project file.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_from(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the default figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the provider chain with an optional extra TOML layer.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment_with(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check merged values that serde alone cannot constrain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.audit.validate().map_err(|error| match error {
            AuditError::InvalidInput { field, reason } => ConfigError::InvalidValue {
                field: field.replacen("policy.", "audit.", 1),
                reason,
            },
            AuditError::Other(other) => ConfigError::InvalidValue {
                field: "audit".into(),
                reason: other.to_string(),
            },
        })?;

        if !self.general.has_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!(
                    "expected one of {}, got '{}'",
                    KNOWN_FORMATS.join(", "),
                    self.general.default_format
                ),
            });
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ironclad").join("config.toml"))
    }
}
