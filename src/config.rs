use serde::Deserialize;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "CASE_STUDIES_CONFIG";

/// File looked up in the working directory when no override is given.
pub const DEFAULT_CONFIG_FILE: &str = "case-studies.toml";

// =============================================================================
// Errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

// =============================================================================
// Config
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaseConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub color: bool,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            color: true,
        }
    }
}

impl CaseConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads from `CASE_STUDIES_CONFIG`, falling back to `./case-studies.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path(env::var_os(CONFIG_ENV)))
    }

    /// A missing file means defaults; anything else unreadable is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// The override path when one is set, else the working-directory default.
pub fn config_path(override_path: Option<OsString>) -> PathBuf {
    override_path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

// =============================================================================
// Tests
// =============================================================================
