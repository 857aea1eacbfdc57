// public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatting;
pub mod global;
pub mod loggable;
pub mod logger;
pub mod prompt;
pub mod settings;
pub mod severity;
pub mod theme;

// private modules
mod eseq;
mod xerr;

#[cfg(test)]
mod testing;

// public uses
pub use formatting::Formatter;
pub use loggable::{AsDisplay, Loggable};
pub use logger::Logger;
pub use prompt::{SEVERITY_MARKER, build_prompt};
pub use settings::{ColorOption, Options};
pub use severity::{RelaxedSeverity, Severity};
pub use theme::Theme;
