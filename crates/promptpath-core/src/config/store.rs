//! Config store for loading config.toml.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::ProjectTable;

use super::parser;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: PathBuf,
    home_dir: PathBuf,
}

impl ConfigStore {
    pub fn from_paths(config_path: PathBuf, home_dir: PathBuf) -> Self {
        Self {
            config_path,
            home_dir,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the project table. A missing file yields an empty table.
    pub fn load(&self) -> Result<ProjectTable, ConfigError> {
        let content = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.config_path.display(), "no config file, using empty table");
                return Ok(ProjectTable::empty());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.config_path.clone(),
                    source,
                });
            }
        };

        let table = parser::parse_config_str(&content, &self.config_path, &self.home_dir)?;
        tracing::debug!(
            path = %self.config_path.display(),
            projects = table.len(),
            "loaded config"
        );
        Ok(table)
    }
}
