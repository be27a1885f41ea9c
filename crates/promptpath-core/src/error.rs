//! Error types surfaced to the binary.
//!
//! A directory outside every project is not an error; it resolves through
//! the fallback rules instead.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed or incomplete configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}{}:\n{excerpt}\n\n{message}", path.display(), line_suffix(*line))]
    Parse {
        path: PathBuf,
        line: Option<usize>,
        excerpt: String,
        message: String,
    },

    #[error("invalid project #{index}{} in {}: {reason}", name_suffix(name.as_deref()), path.display())]
    InvalidEntry {
        path: PathBuf,
        /// 1-based position in the `projects` list.
        index: usize,
        name: Option<String>,
        reason: String,
    },

    #[error("could not determine home directory")]
    NoHome,
}

/// The operating environment could not report a current directory.
#[derive(Debug, Error)]
#[error("current directory is unavailable")]
pub struct CwdUnavailableError {
    #[from]
    source: std::io::Error,
}

fn line_suffix(line: Option<usize>) -> String {
    line.map(|line| format!(" at line {line}")).unwrap_or_default()
}

fn name_suffix(name: Option<&str>) -> String {
    name.map(|name| format!(" ('{name}')")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_entry_names_the_offender() {
        let err = ConfigError::InvalidEntry {
            path: PathBuf::from("/cfg/config.toml"),
            index: 2,
            name: Some("api".to_string()),
            reason: "missing required field `root_path`".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "invalid project #2 ('api') in /cfg/config.toml: missing required field `root_path`"
        );
    }

    #[test]
    fn cwd_unavailable_wraps_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CwdUnavailableError::from(io);
        assert_eq!(err.to_string(), "current directory is unavailable");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "gone");
    }

    #[test]
    fn read_error_keeps_io_error_out_of_message() {
        let err = ConfigError::Read {
            path: PathBuf::from("/cfg/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to read config file /cfg/config.toml");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
    }
}
