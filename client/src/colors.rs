use crate::config::Theme;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub player: &'static str,
    pub ai: &'static str,
    pub hint: &'static str,
    pub highlight: &'static str,
    enabled: bool,
}

impl Palette {
    pub fn for_theme(theme: Theme, use_colors: bool) -> Self {
        if !use_colors {
            return Self::plain();
        }
        match theme {
            Theme::Light => Self {
                player: "\x1b[34m",
                ai: "\x1b[31m",
                hint: "\x1b[90m",
                highlight: "\x1b[1;4m",
                enabled: true,
            },
            Theme::Dark => Self {
                player: "\x1b[94m",
                ai: "\x1b[91m",
                hint: "\x1b[37m",
                highlight: "\x1b[1;4m",
                enabled: true,
            },
        }
    }

    /// Falls back to [`Palette::plain`] when the output is not a terminal.
    pub fn for_output(theme: Theme, use_colors: bool, is_terminal: bool) -> Self {
        Self::for_theme(theme, use_colors && is_terminal)
    }

    pub fn plain() -> Self {
        Self {
            player: "",
            ai: "",
            hint: "",
            highlight: "",
            enabled: false,
        }
    }

    pub fn paint(&self, color: &str, text: &str) -> String {
        if !self.enabled || color.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", color, text, RESET)
    }
}
