//! Project-root configuration
//!
//! A single per-user TOML file lists the project roots. It is read fresh
//! on every invocation and never written.

pub mod parser;
pub mod paths;
pub mod schema;
pub mod store;

pub use parser::{parse_config, parse_config_str};
pub use paths::{CONFIG_PATH_ENV, config_path_in, default_config_path};
pub use schema::{ColorValue, ProjectConfigEntry, PromptPathConfig};
pub use store::ConfigStore;
