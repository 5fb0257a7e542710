//! Process configuration read from the environment.

use std::net::{AddrParseError, SocketAddr};

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::task::services::TaskValidationConfig;

/// Listen address variable.
pub const BIND_VAR: &str = "TRACKBOARD_BIND";
/// Seed snapshot path variable.
pub const SEED_VAR: &str = "TRACKBOARD_SEED";
/// Strict timeline variable.
pub const REQUIRE_TIMELINE_VAR: &str = "TRACKBOARD_REQUIRE_TIMELINE";

const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The listen address is not a socket address.
    #[error("invalid TRACKBOARD_BIND value '{value}': {source}")]
    InvalidBind {
        /// Supplied value.
        value: String,
        /// Parse failure.
        #[source]
        source: AddrParseError,
    },
    /// A boolean variable holds something other than `true` or `false`.
    #[error("invalid {key} value '{value}': expected true or false")]
    InvalidFlag {
        /// Variable name.
        key: &'static str,
        /// Supplied value.
        value: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    pub bind: SocketAddr,
    /// JSON snapshot loaded into the store at start-up.
    pub seed: Option<Utf8PathBuf>,
    /// Task validation settings.
    pub task_validation: TaskValidationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed: None,
            task_validation: TaskValidationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_bind = read(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind = raw_bind
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBind {
                value: raw_bind.clone(),
                source,
            })?;
        let require_timeline_on_create = match read(REQUIRE_TIMELINE_VAR) {
            None => false,
            Some(value) => parse_flag(REQUIRE_TIMELINE_VAR, &value)?,
        };

        Ok(Self {
            bind,
            seed: read(SEED_VAR).map(Utf8PathBuf::from),
            task_validation: TaskValidationConfig {
                require_timeline_on_create,
            },
        })
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_owned(),
        }),
    }
}
