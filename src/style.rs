//! Colored console output
//!
//! Used for human-facing listings only; generated GRUB text is never styled.

/// ANSI color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Reset,
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
}

impl Color {
    pub fn code(&self) -> &'static str {
        match self {
            Color::Reset => "\x1b[0m",
            Color::Red => "\x1b[0;31m",
            Color::Blue => "\x1b[0;34m",
            Color::Yellow => "\x1b[1;33m",
            Color::Green => "\x1b[0;32m",
            Color::Purple => "\x1b[0;35m",
        }
    }
}

/// Applies colors when enabled, passes text through otherwise
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Enable color for a terminal stream unless disabled by flag or `NO_COLOR`
    pub fn detect(no_color: bool, is_terminal: bool) -> Self {
        let env_disabled = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!no_color && !env_disabled && is_terminal)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            format!("{}{}{}", color.code(), text, Color::Reset.code())
        } else {
            text.to_string()
        }
    }

    fn event(&self, color: Color, text: &str) -> String {
        format!("{}{}", self.paint("*\t", color), text)
    }

    /// `*` marker in green
    pub fn info(&self, text: &str) -> String {
        self.event(Color::Green, text)
    }

    /// `*` marker in yellow
    pub fn warn(&self, text: &str) -> String {
        self.event(Color::Yellow, text)
    }

    /// `*` marker in red
    pub fn error(&self, text: &str) -> String {
        self.event(Color::Red, text)
    }
}
