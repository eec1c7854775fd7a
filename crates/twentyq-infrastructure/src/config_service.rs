//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/twentyq/config.toml) or an explicit
//! path.

use crate::paths::{PathError, TwentyqPaths};
use std::path::{Path, PathBuf};
use thiserror::Error;
use twentyq_core::config::RootConfig;

/// Errors raised while locating or parsing the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot resolve config path: {0}")]
    Path(#[from] PathError),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads `RootConfig` from a TOML file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a ConfigService reading from an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a ConfigService reading from the default location.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self::with_path(TwentyqPaths::config_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config file. A missing file yields the default config; an
    /// unreadable or malformed file is an error.
    pub fn load(&self) -> Result<RootConfig, ConfigError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RootConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
