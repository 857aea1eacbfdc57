// std imports
use std::include_str;

// third-party imports
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// ---

pub(crate) static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

/// Options configure a logger.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
    /// Prompt printed before every severity-tagged line, `{sev}` is
    /// replaced with the severity label.
    pub prompt: String,
    /// Character marking substitution points in message templates.
    pub format_char: char,
    /// Severity label styling.
    pub color: ColorOption,
}

impl Options {
    pub fn new<P: Into<String>>(prompt: P) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_format_char(self, format_char: char) -> Self {
        Self { format_char, ..self }
    }

    pub fn with_color(self, color: ColorOption) -> Self {
        Self { color, ..self }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            format_char: '@',
            color: ColorOption::Always,
        }
    }
}

// ---

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColorOption {
    /// Style severities only when writing to a terminal.
    Auto,
    /// Always style severities.
    #[default]
    Always,
    /// Never style severities.
    Never,
}

impl ColorOption {
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}
