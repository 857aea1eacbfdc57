// third-party imports
use enum_map::{EnumMap, enum_map};

// local imports
use crate::{
    eseq::{Color, Mode, Sequence},
    severity::Severity,
};

// ---

/// Theme holds the display label of each severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    labels: EnumMap<Severity, String>,
}

impl Theme {
    /// Severity names wrapped in terminal color sequences, TRACE is left plain.
    pub fn styled() -> Self {
        Self::build(|severity| match severity {
            Severity::Fatal => Some(Sequence::new([Mode::Bold.into(), Color::Red.fg()])),
            Severity::Error => Some(Color::Red.fg().into()),
            Severity::Warning => Some(Color::Yellow.fg().into()),
            Severity::Info => Some(Color::Blue.fg().into()),
            Severity::Trace => None,
        })
    }

    /// Bare severity names.
    pub fn plain() -> Self {
        Self::build(|_| None)
    }

    pub fn new(use_colors: bool) -> Self {
        if use_colors { Self::styled() } else { Self::plain() }
    }

    #[inline]
    pub fn label(&self, severity: Severity) -> &str {
        &self.labels[severity]
    }

    fn build<F>(style: F) -> Self
    where
        F: Fn(Severity) -> Option<Sequence>,
    {
        let label = |severity: Severity| match style(severity) {
            Some(seq) => format!("{}{}{}", seq, severity.name(), Sequence::reset()),
            None => severity.name().to_owned(),
        };

        Self {
            labels: enum_map! {
                severity => label(severity),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::styled()
    }
}
