//! Turn a [`ResolvedDisplay`] into the final prompt text.
//!
//! Colors reach this module as [`Color`] values; escape bytes are produced
//! here and nowhere else.

use console::Style;

use crate::resolve::{Label, ResolvedDisplay};
use crate::types::{Color, NamedColor};

pub trait LabelRenderer {
    fn render(&self, display: &ResolvedDisplay) -> String;
}

/// Label and path with no markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl LabelRenderer for PlainRenderer {
    fn render(&self, display: &ResolvedDisplay) -> String {
        match &display.label {
            Some(label) => format!("{}{}", label.name, display.path),
            None => display.path.clone(),
        }
    }
}

/// Which non-printing markers surround escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEscapes {
    /// Raw SGR sequences.
    None,
    /// zsh `%{ ... %}`; literal `%` in text is doubled.
    Zsh,
    /// readline `\x01 ... \x02`, understood by bash; literal `\` is doubled.
    Bash,
}

impl PromptEscapes {
    fn markers(self) -> (&'static str, &'static str) {
        match self {
            PromptEscapes::None => ("", ""),
            PromptEscapes::Zsh => ("%{", "%}"),
            PromptEscapes::Bash => ("\u{1}", "\u{2}"),
        }
    }

    fn escape_text(self, text: &str) -> String {
        match self {
            PromptEscapes::Zsh => text.replace('%', "%%"),
            PromptEscapes::Bash => text.replace('\\', "\\\\"),
            PromptEscapes::None => text.to_string(),
        }
    }
}

/// Colors the label with ANSI SGR sequences.
#[derive(Debug, Clone, Copy)]
pub struct AnsiRenderer {
    escapes: PromptEscapes,
}

impl AnsiRenderer {
    pub fn new() -> Self {
        Self {
            escapes: PromptEscapes::None,
        }
    }

    pub fn zsh() -> Self {
        Self {
            escapes: PromptEscapes::Zsh,
        }
    }

    pub fn bash() -> Self {
        Self {
            escapes: PromptEscapes::Bash,
        }
    }

    fn render_label(&self, label: &Label) -> String {
        let name = self.escapes.escape_text(&label.name);
        let Some(color) = label.color else {
            return name;
        };

        let (on, off) = sgr_pair(color);
        let (open, close) = self.escapes.markers();
        format!("{open}{on}{close}{name}{open}{off}{close}")
    }
}

impl Default for AnsiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelRenderer for AnsiRenderer {
    fn render(&self, display: &ResolvedDisplay) -> String {
        let path = self.escapes.escape_text(&display.path);
        match &display.label {
            Some(label) => format!("{}{}", self.render_label(label), path),
            None => path,
        }
    }
}

/// Color-on and color-off sequences for `color`.
fn sgr_pair(color: Color) -> (String, String) {
    const SENTINEL: char = '\u{0}';

    let styled = style_for(color)
        .force_styling(true)
        .apply_to(SENTINEL)
        .to_string();
    match styled.split_once(SENTINEL) {
        Some((on, off)) => (on.to_string(), off.to_string()),
        None => (String::new(), String::new()),
    }
}

fn style_for(color: Color) -> Style {
    let style = Style::new();
    match color {
        Color::Indexed(index) => style.color256(index),
        Color::Named(named) => {
            let style = match named {
                NamedColor::Black | NamedColor::BrightBlack => style.black(),
                NamedColor::Red | NamedColor::BrightRed => style.red(),
                NamedColor::Green | NamedColor::BrightGreen => style.green(),
                NamedColor::Yellow | NamedColor::BrightYellow => style.yellow(),
                NamedColor::Blue | NamedColor::BrightBlue => style.blue(),
                NamedColor::Magenta | NamedColor::BrightMagenta => style.magenta(),
                NamedColor::Cyan | NamedColor::BrightCyan => style.cyan(),
                NamedColor::White | NamedColor::BrightWhite => style.white(),
            };
            if named.is_bright() { style.bright() } else { style }
        }
    }
}
