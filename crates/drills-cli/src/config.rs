//! TOML configuration for the `drills` binary.
//!
//! Resolution order: `--config` flag > `DRILLS_CONFIG` env var >
//! `<config_dir>/drills/config.toml` (only if it exists) > defaults.

use std::path::{Path, PathBuf};

use drills_dictionary::WordDictionary;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "DRILLS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file unreadable at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config parse failed at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Seed entries for `drills dict`.
    pub dictionary: WordDictionary,
    pub wallet: WalletConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub opening_balance: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Read and parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config from the first source that names one.
    ///
    /// `explicit` (the CLI flag) and `env_path` must point at a readable
    /// file. The per-user default is skipped silently when absent.
    pub fn resolve(
        explicit: Option<PathBuf>,
        env_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Self::resolve_with(explicit, env_path, default_path())
    }

    /// [`resolve`](Self::resolve) with the per-user location supplied.
    pub fn resolve_with(
        explicit: Option<PathBuf>,
        env_path: Option<PathBuf>,
        default: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.or(env_path) {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(&path);
        }
        match default {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading default config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Per-user config location, e.g. `~/.config/drills/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("drills").join("config.toml"))
}
