//! Shared core types used by the config loader, resolver and renderers.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// One of the 16 standard terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BrightBlack,
        NamedColor::BrightRed,
        NamedColor::BrightGreen,
        NamedColor::BrightYellow,
        NamedColor::BrightBlue,
        NamedColor::BrightMagenta,
        NamedColor::BrightCyan,
        NamedColor::BrightWhite,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
            NamedColor::BrightBlack => "bright-black",
            NamedColor::BrightRed => "bright-red",
            NamedColor::BrightGreen => "bright-green",
            NamedColor::BrightYellow => "bright-yellow",
            NamedColor::BrightBlue => "bright-blue",
            NamedColor::BrightMagenta => "bright-magenta",
            NamedColor::BrightCyan => "bright-cyan",
            NamedColor::BrightWhite => "bright-white",
        }
    }

    /// Whether this is one of the high-intensity variants.
    pub fn is_bright(self) -> bool {
        matches!(
            self,
            NamedColor::BrightBlack
                | NamedColor::BrightRed
                | NamedColor::BrightGreen
                | NamedColor::BrightYellow
                | NamedColor::BrightBlue
                | NamedColor::BrightMagenta
                | NamedColor::BrightCyan
                | NamedColor::BrightWhite
        )
    }
}

/// Display hint attached to a project label.
///
/// Kept structural so the matching code never sees escape sequences;
/// the renderer decides how (or whether) to turn it into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Named(NamedColor),
    /// Index into the 256-color palette.
    Indexed(u8),
}

/// Error returned when a color hint is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown color '{0}' (expected a color name like 'cyan' or 'bright-red', or an index 0-255)"
)]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");

        if let Ok(index) = normalized.parse::<u8>() {
            return Ok(Color::Indexed(index));
        }

        NamedColor::ALL
            .iter()
            .copied()
            .find(|named| named.as_str() == normalized)
            .map(Color::Named)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.as_str()),
            Color::Indexed(index) => write!(f, "{index}"),
        }
    }
}

/// A named project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: String,
    /// Absolute, normalized, no trailing separator. Symlinks are not resolved.
    pub root_path: PathBuf,
    pub color: Option<Color>,
}

impl ProjectEntry {
    pub fn new(name: impl Into<String>, root_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root_path: root_path.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Ordered set of project entries, built once per invocation.
///
/// Entries keep configuration order. When two entries share a root the
/// later one wins at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectTable {
    entries: Vec<ProjectEntry>,
    code_root: Option<PathBuf>,
}

impl ProjectTable {
    pub fn new(entries: Vec<ProjectEntry>) -> Self {
        Self {
            entries,
            code_root: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach the directory whose prefix is dropped from fallback paths.
    pub fn with_code_root(mut self, code_root: Option<PathBuf>) -> Self {
        self.code_root = code_root;
        self
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn code_root(&self) -> Option<&Path> {
        self.code_root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
