//! Lexical path helpers.
//!
//! Nothing here touches the filesystem: symlinks are never resolved and
//! paths are never checked for existence.

use std::path::{Component, Path, PathBuf};

const HOME_MARKER: &str = "~";

/// Normalize a configured project root.
///
/// Expands a leading `~`, anchors relative paths at `home` (never at the
/// process cwd), folds `.`/`..`, and drops trailing separators.
pub fn normalize_root(raw: &str, home: &Path) -> PathBuf {
    let expanded = expand_home(raw.trim(), home);
    let anchored = if expanded.is_absolute() {
        expanded
    } else {
        home.join(expanded)
    };
    normalize_path(&anchored)
}

/// Replace a leading `~` or `~/` with `home`. Other inputs are returned as-is.
pub fn expand_home(raw: &str, home: &Path) -> PathBuf {
    if raw == HOME_MARKER {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest.trim_start_matches('/')),
        None => PathBuf::from(raw),
    }
}

/// Fold `.` and `..` components and drop trailing separators.
///
/// `..` never climbs above the root of an absolute path.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component),
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}

/// Join the components of `path` below `base` with `/`.
///
/// Returns `None` when `path` is not component-wise under `base`, and an
/// empty string when the two are equal.
pub fn relative_suffix(path: &Path, base: &Path) -> Option<String> {
    let rest = path.strip_prefix(base).ok()?;
    let parts: Vec<_> = rest
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> PathBuf {
        PathBuf::from("/home/me")
    }

    #[test]
    fn expands_bare_and_prefixed_tilde() {
        assert_eq!(normalize_root("~", &home()), PathBuf::from("/home/me"));
        assert_eq!(
            normalize_root("~/work/api", &home()),
            PathBuf::from("/home/me/work/api")
        );
    }

    #[test]
    fn relative_roots_anchor_at_home() {
        assert_eq!(
            normalize_root("work/api", &home()),
            PathBuf::from("/home/me/work/api")
        );
        assert_eq!(
            normalize_root("./scratch", &home()),
            PathBuf::from("/home/me/scratch")
        );
    }

    #[test]
    fn strips_trailing_separators() {
        assert_eq!(
            normalize_root("/srv/app///", &home()),
            PathBuf::from("/srv/app")
        );
        assert_eq!(normalize_root("~/", &home()), PathBuf::from("/home/me"));
    }

    #[test]
    fn folds_dot_segments() {
        assert_eq!(
            normalize_path(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(normalize_path(Path::new("/../..")), PathBuf::from("/"));
    }

    #[test]
    fn root_stays_root() {
        assert_eq!(normalize_path(Path::new("/")), PathBuf::from("/"));
        assert_eq!(normalize_root("/", &home()), PathBuf::from("/"));
    }

    #[test]
    fn tilde_user_is_not_expanded() {
        assert_eq!(
            normalize_root("~other/x", &home()),
            PathBuf::from("/home/me/~other/x")
        );
    }

    #[test]
    fn suffix_is_component_aligned() {
        let base = Path::new("/home/proj");
        assert_eq!(relative_suffix(Path::new("/home/proj"), base), Some(String::new()));
        assert_eq!(
            relative_suffix(Path::new("/home/proj/src/lib"), base),
            Some("src/lib".to_string())
        );
        assert_eq!(relative_suffix(Path::new("/home/project2"), base), None);
    }
}
