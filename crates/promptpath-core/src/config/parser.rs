//! TOML parser with helpful error messages

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;
use crate::fs::normalize_root;
use crate::types::{Color, ProjectEntry, ProjectTable};

use super::schema::{ColorValue, ProjectConfigEntry, PromptPathConfig};

/// Parse config.toml into a project table
pub fn parse_config(path: &Path, home: &Path) -> Result<ProjectTable, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&content, path, home)
}

/// Parse config.toml content from a string.
///
/// `source` is only used to label errors.
pub fn parse_config_str(
    content: &str,
    source: &Path,
    home: &Path,
) -> Result<ProjectTable, ConfigError> {
    let config: PromptPathConfig =
        toml::from_str(content).map_err(|e| enhance_toml_error(e, content, source))?;

    build_table(config, source, home)
}

/// Attach a line number and surrounding lines to a TOML error
fn enhance_toml_error(error: toml::de::Error, content: &str, source: &Path) -> ConfigError {
    let line = error
        .span()
        .map(|span| content[..span.start.min(content.len())].matches('\n').count() + 1);

    let excerpt = line
        .map(|line_num| get_line_context(content, line_num))
        .unwrap_or_default();

    ConfigError::Parse {
        path: source.to_path_buf(),
        line,
        excerpt,
        message: error.message().to_string(),
    }
}

/// Get context lines around an error
fn get_line_context(content: &str, line_num: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = line_num.saturating_sub(2);
    let end = (line_num + 1).min(lines.len());
    if start >= end {
        return String::new();
    }

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            let marker = if num == line_num { ">>>" } else { "   " };
            format!("{} {:4} | {}", marker, num, line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate raw entries and normalize their roots
fn build_table(
    config: PromptPathConfig,
    source: &Path,
    home: &Path,
) -> Result<ProjectTable, ConfigError> {
    let mut entries = Vec::with_capacity(config.projects.len());
    let mut seen_names: HashMap<String, usize> = HashMap::new();

    for (offset, raw) in config.projects.into_iter().enumerate() {
        let index = offset + 1;
        let entry = build_entry(raw, home).map_err(|(name, reason)| ConfigError::InvalidEntry {
            path: source.to_path_buf(),
            index,
            name,
            reason,
        })?;

        if let Some(first) = seen_names.insert(entry.name.clone(), index) {
            return Err(ConfigError::InvalidEntry {
                path: source.to_path_buf(),
                index,
                name: Some(entry.name),
                reason: format!("duplicate project name (first defined by project #{first})"),
            });
        }

        if let Some(shadowed) = entries
            .iter()
            .find(|existing: &&ProjectEntry| existing.root_path == entry.root_path)
        {
            tracing::debug!(
                root = %entry.root_path.display(),
                shadowed = %shadowed.name,
                winner = %entry.name,
                "duplicate project root, later entry wins"
            );
        }

        entries.push(entry);
    }

    let code_root = config
        .code_root
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(|raw| normalize_root(raw, home));

    Ok(ProjectTable::new(entries).with_code_root(code_root))
}

type EntryError = (Option<String>, String);

fn build_entry(raw: ProjectConfigEntry, home: &Path) -> Result<ProjectEntry, EntryError> {
    let name = raw.name.map(|name| name.trim().to_string());

    let Some(root) = raw.root_path else {
        return Err((name, "missing required field `root_path`".to_string()));
    };
    if root.trim().is_empty() {
        return Err((name, "`root_path` must not be empty".to_string()));
    }

    let name = match name {
        None => return Err((None, "missing required field `name`".to_string())),
        Some(name) if name.is_empty() => {
            return Err((None, "`name` must not be empty".to_string()));
        }
        Some(name) => name,
    };

    let color = match raw.color {
        None => None,
        Some(value) => Some(parse_color(value).map_err(|reason| (Some(name.clone()), reason))?),
    };

    Ok(ProjectEntry {
        name,
        root_path: normalize_root(&root, home),
        color,
    })
}

fn parse_color(value: ColorValue) -> Result<Color, String> {
    match value {
        ColorValue::Index(index) => u8::try_from(index)
            .map(Color::Indexed)
            .map_err(|_| format!("color index {index} is out of range (0-255)")),
        ColorValue::Name(name) => name.parse::<Color>().map_err(|e| e.to_string()),
    }
}
