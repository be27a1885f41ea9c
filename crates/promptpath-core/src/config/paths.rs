//! Config path resolution helpers.

use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = "promptpath";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "PROMPTPATH_CONFIG";

/// `<config_dir>/promptpath/config.toml`
pub fn config_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Per-user config file, falling back to `~/.config` when the platform
/// has no config directory.
pub fn default_config_path(home: &Path) -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| home.join(".config"));
    config_path_in(&config_dir)
}
