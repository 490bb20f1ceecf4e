use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Error,
    Warning,
    Success,
    Info,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Error => "\x1b[31m",   // Red
            Style::Warning => "\x1b[33m", // Yellow
            Style::Success => "\x1b[32m", // Green
            Style::Info => "\x1b[36m",    // Cyan
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// `text` wrapped in the style's escape codes when colors are enabled.
    pub fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            format!("{}{text}{RESET}", style.code())
        } else {
            text.to_string()
        }
    }
}

pub fn should_use_colors(no_color: bool) -> bool {
    // Priority: --no-color > NO_COLOR env > TTY detection
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stdout().is_terminal()
}
