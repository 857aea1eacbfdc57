// std imports
use std::fmt;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

// third-party imports
use clap::{
    ValueEnum,
    builder::{TypedValueParser, ValueParserFactory},
    error::ErrorKind,
};
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

// local imports
use crate::xerr::Suggestions;

// ---

/// Severity of a log line, most critical first.
#[derive(
    ValueEnum,
    Clone,
    Copy,
    Debug,
    Deserialize,
    Serialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Enum,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Fatal,
    Error,
    Warning,
    Info,
    Trace,
}

impl Severity {
    /// Unstyled display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---

#[derive(Debug, Clone)]
pub struct ParseError {
    pub value: Arc<str>,
    pub suggestions: Suggestions,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid severity {:?}", &*self.value)?;
        if !self.suggestions.is_empty() {
            write!(f, ", did you mean {}?", self.suggestions)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

// ---

/// Severity parsed with case-insensitive aliases, e.g. `warn` or `E`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RelaxedSeverity(Severity);

impl From<RelaxedSeverity> for Severity {
    fn from(relaxed: RelaxedSeverity) -> Severity {
        relaxed.0
    }
}

impl Deref for RelaxedSeverity {
    type Target = Severity;

    fn deref(&self) -> &Severity {
        &self.0
    }
}

impl ValueParserFactory for RelaxedSeverity {
    type Parser = SeverityValueParser;
    fn value_parser() -> Self::Parser {
        SeverityValueParser
    }
}

impl TryFrom<&str> for RelaxedSeverity {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SeverityValueParser::alternate_values()
            .iter()
            .find(|(_, values)| values.iter().any(|x| value.eq_ignore_ascii_case(x)))
            .map(|(severity, _)| RelaxedSeverity(*severity))
            .ok_or_else(|| ParseError {
                value: value.into(),
                suggestions: Suggestions::new(value, Severity::iter().map(|severity| severity.as_ref().to_string())),
            })
    }
}

// ---

#[derive(Clone, Debug)]
pub struct SeverityValueParser;

impl TypedValueParser for SeverityValueParser {
    type Value = RelaxedSeverity;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<RelaxedSeverity, clap::Error> {
        let value = value
            .to_str()
            .ok_or_else(|| clap::Error::new(ErrorKind::InvalidUtf8).with_cmd(cmd))?;

        RelaxedSeverity::try_from(value).map_err(|err| {
            let message = match arg {
                Some(arg) => format!("{} for '{}'\n", err, arg),
                None => format!("{}\n", err),
            };
            clap::Error::raw(ErrorKind::InvalidValue, message).with_cmd(cmd)
        })
    }
}

impl SeverityValueParser {
    fn alternate_values<'a>() -> &'a [(Severity, &'a [&'a str])] {
        &[
            (Severity::Fatal, &["fatal", "ftl", "f"]),
            (Severity::Error, &["error", "err", "e"]),
            (Severity::Warning, &["warning", "warn", "wrn", "w"]),
            (Severity::Info, &["info", "inf", "i"]),
            (Severity::Trace, &["trace", "trc", "t"]),
        ]
    }
}
