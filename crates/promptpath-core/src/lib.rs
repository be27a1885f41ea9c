//! Promptpath Core Library
//!
//! Resolves a directory against a table of named project roots and renders
//! the short label shown in a shell prompt.

pub mod config;
pub mod context;
pub mod error;
pub mod fs;
pub mod render;
pub mod resolve;
pub mod types;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::ConfigStore;
    pub use crate::context::AppContext;

    // Errors
    pub use crate::error::{ConfigError, CwdUnavailableError};

    // Resolution
    pub use crate::resolve::{Label, ProjectMatch, ResolvedDisplay, Resolver};

    // Rendering
    pub use crate::render::{AnsiRenderer, LabelRenderer, PlainRenderer, PromptEscapes};

    // Types
    pub use crate::types::{Color, NamedColor, ProjectEntry, ProjectTable};
}
