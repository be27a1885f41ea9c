//! Configuration schema for config.toml
//!
//! ```toml
//! code_root = "~/code"
//!
//! [[projects]]
//! name = "api"
//! root_path = "~/work/api"
//! color = "cyan"
//! ```
//!
//! Fields are optional at this layer so that a missing `root_path` can be
//! reported against the entry that lacks it instead of as a bare serde error.

use serde::Deserialize;

/// Root configuration structure for config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptPathConfig {
    /// Directory whose prefix is dropped from paths outside any project
    #[serde(default)]
    pub code_root: Option<String>,

    /// Project roots, in file order
    #[serde(default)]
    pub projects: Vec<ProjectConfigEntry>,
}

/// A single `[[projects]]` entry as written in the file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfigEntry {
    /// Display label; `alias` is the older spelling
    #[serde(default, alias = "alias")]
    pub name: Option<String>,

    /// Root directory; `path` is the older spelling
    #[serde(default, alias = "path")]
    pub root_path: Option<String>,

    #[serde(default)]
    pub color: Option<ColorValue>,
}

/// Color hint as written: `"cyan"`, `"208"` or `208`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Index(i64),
    Name(String),
}
