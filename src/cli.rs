// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::{
    settings::{ColorOption, Options},
    severity::{RelaxedSeverity, SeverityValueParser},
};

// ---

/// Prints a severity-tagged message or a list of values.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file to load, may be repeated, later files take precedence.
    #[arg(long, short = 'c', number_of_values = 1)]
    pub config: Vec<PathBuf>,

    /// Prompt printed before the message, the first {sev} is replaced with the severity.
    #[arg(long, short = 'p', env = "TINY_LOGGER_PROMPT", overrides_with = "prompt")]
    pub prompt: Option<String>,

    /// Placeholder character substituted with arguments in the template.
    #[arg(long, short = 'f', env = "TINY_LOGGER_FORMAT_CHAR", overrides_with = "format_char")]
    pub format_char: Option<char>,

    /// Severity styling options.
    #[arg(long, env = "TINY_LOGGER_COLOR", overrides_with = "color")]
    #[arg(value_enum)]
    pub color: Option<ColorOption>,

    /// Message severity.
    #[arg(
        long,
        short = 's',
        default_value = "info",
        ignore_case = true,
        value_parser = SeverityValueParser,
        overrides_with = "severity"
    )]
    pub severity: RelaxedSeverity,

    /// Print all positional arguments as values separated by spaces, without a prompt.
    #[arg(long, short = 'v')]
    pub value: bool,

    /// Print showcase lines and exit.
    #[arg(long, conflicts_with = "value")]
    pub demo: bool,

    /// Message template, or the first value in --value mode.
    #[arg(name = "TEMPLATE", required_unless_present = "demo", allow_hyphen_values = true)]
    pub template: Option<String>,

    /// Template arguments, or further values in --value mode.
    #[arg(name = "ARGS", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Opt {
    /// Applies command line overrides to the loaded options.
    pub fn apply(&self, options: Options) -> Options {
        Options {
            prompt: self.prompt.clone().unwrap_or(options.prompt),
            format_char: self.format_char.unwrap_or(options.format_char),
            color: self.color.unwrap_or(options.color),
        }
    }
}
