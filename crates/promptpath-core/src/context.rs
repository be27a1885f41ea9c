//! Application context shared by the binary's commands.

use std::path::{Path, PathBuf};

use crate::config::{ConfigStore, default_config_path};
use crate::error::ConfigError;

/// Paths a single invocation works from.
///
/// Built once at startup; nothing here is cached between invocations.
#[derive(Debug, Clone)]
pub struct AppContext {
    home_dir: PathBuf,
    config_path: PathBuf,
}

impl AppContext {
    /// Create a new context with explicit paths.
    pub fn new(home_dir: PathBuf, config_path: PathBuf) -> Self {
        Self {
            home_dir,
            config_path,
        }
    }

    /// Context for the current user, optionally with a config file override.
    pub fn from_env(config_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::NoHome)?;
        let config_path = config_override.unwrap_or_else(|| default_config_path(&home_dir));
        Ok(Self::new(home_dir, config_path))
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config_store(&self) -> ConfigStore {
        ConfigStore::from_paths(self.config_path.clone(), self.home_dir.clone())
    }
}
