//! Match a directory against the project table and build its display form.
//!
//! Matching is longest-prefix over whole path components: root `/home/proj`
//! matches `/home/proj` and `/home/proj/src`, never `/home/project2`.
//! Among equally long roots the entry defined last wins.

use std::path::{Path, PathBuf};

use crate::error::CwdUnavailableError;
use crate::fs::{normalize_path, relative_suffix};
use crate::types::{Color, ProjectEntry, ProjectTable};

/// Project label shown in place of a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub color: Option<Color>,
}

/// What gets printed: an optional label followed by a path.
///
/// With a label, `path` is the suffix below the project root (`""` or
/// `"/src/handlers"`). Without one it is the abbreviated directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDisplay {
    pub label: Option<Label>,
    pub path: String,
}

impl ResolvedDisplay {
    pub fn unlabeled(path: impl Into<String>) -> Self {
        Self {
            label: None,
            path: path.into(),
        }
    }

    pub fn is_project(&self) -> bool {
        self.label.is_some()
    }
}

/// The entry selected for a directory and the path remaining below its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMatch<'a> {
    pub entry: &'a ProjectEntry,
    /// Empty when the directory is the root itself, otherwise `/`-prefixed.
    pub suffix: String,
}

#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    table: &'a ProjectTable,
    home: PathBuf,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a ProjectTable, home: impl AsRef<Path>) -> Self {
        Self {
            table,
            home: normalize_path(home.as_ref()),
        }
    }

    /// Most specific project enclosing `dir`, if any.
    pub fn find_project(&self, dir: &Path) -> Option<ProjectMatch<'a>> {
        let dir = normalize_path(dir);
        // max_by_key keeps the last of several equal keys, which gives
        // duplicate roots their last-write-wins behavior.
        let entry = self
            .table
            .entries()
            .iter()
            .filter(|entry| dir.starts_with(&entry.root_path))
            .max_by_key(|entry| entry.root_path.as_os_str().len())?;

        let rest = relative_suffix(&dir, &entry.root_path)?;
        let suffix = if rest.is_empty() {
            rest
        } else {
            format!("/{rest}")
        };

        tracing::debug!(project = %entry.name, suffix = %suffix, "matched project root");
        Some(ProjectMatch { entry, suffix })
    }

    /// Display form for `dir`. Never fails: a directory outside every
    /// project falls back to the home/code-root abbreviations.
    pub fn resolve(&self, dir: &Path) -> ResolvedDisplay {
        if let Some(found) = self.find_project(dir) {
            return ResolvedDisplay {
                label: Some(Label {
                    name: found.entry.name.clone(),
                    color: found.entry.color,
                }),
                path: found.suffix,
            };
        }

        ResolvedDisplay::unlabeled(self.abbreviate(&normalize_path(dir)))
    }

    /// Display form for the process's current directory.
    pub fn resolve_cwd(&self) -> Result<ResolvedDisplay, CwdUnavailableError> {
        let cwd = current_dir()?;
        Ok(self.resolve(&cwd))
    }

    fn abbreviate(&self, dir: &Path) -> String {
        if is_filesystem_root(dir) {
            return dir.to_string_lossy().into_owned();
        }
        if dir == self.home {
            return "~".to_string();
        }

        if let Some(code_root) = self.table.code_root() {
            if let Some(rest) = relative_suffix(dir, code_root) {
                if !rest.is_empty() {
                    return rest;
                }
                if let Some(name) = code_root.file_name() {
                    return name.to_string_lossy().into_owned();
                }
            }
        }

        if !is_filesystem_root(&self.home) {
            if let Some(rest) = relative_suffix(dir, &self.home) {
                return format!("~/{rest}");
            }
        }

        dir.to_string_lossy().into_owned()
    }
}

/// The process's current directory, normalized.
pub fn current_dir() -> Result<PathBuf, CwdUnavailableError> {
    let cwd = std::env::current_dir()?;
    Ok(normalize_path(&cwd))
}

fn is_filesystem_root(path: &Path) -> bool {
    path.has_root() && path.parent().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ProjectTable {
        ProjectTable::new(vec![
            ProjectEntry::new("outer", "/a"),
            ProjectEntry::new("inner", "/a/b"),
        ])
    }

    #[test]
    fn picks_longest_root() {
        let table = table();
        let resolver = Resolver::new(&table, "/home/me");

        let found = resolver.find_project(Path::new("/a/b/c")).unwrap();
        assert_eq!(found.entry.name, "inner");
        assert_eq!(found.suffix, "/c");

        let found = resolver.find_project(Path::new("/a/bc")).unwrap();
        assert_eq!(found.entry.name, "outer");
        assert_eq!(found.suffix, "/bc");
    }

    #[test]
    fn trailing_separator_on_dir_is_ignored() {
        let table = table();
        let resolver = Resolver::new(&table, "/home/me");

        let display = resolver.resolve(Path::new("/a/b/"));
        assert_eq!(display.label.unwrap().name, "inner");
        assert_eq!(display.path, "");
    }

    #[test]
    fn filesystem_root_is_kept() {
        let table = ProjectTable::empty();
        let resolver = Resolver::new(&table, "/home/me");
        assert_eq!(resolver.resolve(Path::new("/")).path, "/");
    }

    #[test]
    fn root_home_does_not_abbreviate_everything() {
        let table = ProjectTable::empty();
        let resolver = Resolver::new(&table, "/");
        assert_eq!(resolver.resolve(Path::new("/usr/bin")).path, "/usr/bin");
    }
}
