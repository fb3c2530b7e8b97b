//! Configuration handling for halfsl500

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Halfsl500Error, Result};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "HALFSL500_CONFIG";

/// Project-local config location, relative to the working directory
pub const PROJECT_CONFIG_PATH: &str = ".halfsl500/config.toml";

/// halfsl500 configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub halfsl500: Halfsl500Config,

    /// Settings for the `version` command
    #[serde(default)]
    pub version: VersionConfig,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Halfsl500Config {
    /// Default log filter when neither HALFSL500_LOG nor --verbose is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Halfsl500Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Settings for the `version` command
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VersionConfig {
    /// Always show extended build information
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from TOML text
    ///
    /// `path` is only used to label errors.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Halfsl500Error::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| Halfsl500Error::FileNotFound(path.display().to_string()))?;
        Self::from_toml(&content, path)
    }

    /// Load configuration from the first location that applies
    ///
    /// See [`discover_from`] for how failures are handled.
    pub fn discover(cwd: &Path) -> Result<Discovered> {
        let explicit = std::env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        discover_from(explicit.as_deref(), &candidate_paths(cwd))
    }
}

/// Configuration picked by discovery
#[derive(Debug, Default)]
pub struct Discovered {
    /// Effective configuration
    pub config: Config,
    /// File the configuration was read from
    pub path: Option<PathBuf>,
    /// Error from a discovered file that was replaced by the defaults
    pub skipped: Option<Halfsl500Error>,
}

/// Load configuration from `explicit`, else the first existing candidate
///
/// An explicit path that cannot be read or parsed is an error. A candidate
/// that fails to load is reported in [`Discovered::skipped`] and the defaults
/// are used instead.
pub fn discover_from(explicit: Option<&Path>, candidates: &[PathBuf]) -> Result<Discovered> {
    if let Some(path) = explicit {
        let config = Config::load(path)?;
        return Ok(Discovered {
            config,
            path: Some(path.to_path_buf()),
            skipped: None,
        });
    }

    let Some(candidate) = candidates.iter().find(|c| c.is_file()) else {
        return Ok(Discovered::default());
    };

    Ok(match Config::load(candidate) {
        Ok(config) => Discovered {
            config,
            path: Some(candidate.clone()),
            skipped: None,
        },
        Err(e) => Discovered {
            skipped: Some(e),
            ..Default::default()
        },
    })
}

/// Config file locations in lookup order, excluding the env override
pub fn candidate_paths(cwd: &Path) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(PROJECT_CONFIG_PATH)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("halfsl500").join("config.toml"));
    }
    paths
}
