//! Process-wide logger writing to the standard output.
//!
//! The logger starts with [`Options::default`] and can be reconfigured at
//! any time with [`initialize`]. Calls are serialized by a lock. Output
//! errors are discarded so that logging never fails.

// std imports
use std::{
    io::Stdout,
    sync::{Mutex, PoisonError},
};

// third-party imports
use once_cell::sync::Lazy;

// local imports
use crate::{Loggable, Logger, Options, Severity};

// ---

static LOGGER: Lazy<Mutex<Logger<Stdout>>> = Lazy::new(|| Mutex::new(Logger::stdout(Options::default())));

/// Replaces the process-wide options.
pub fn initialize(options: Options) {
    log::debug!("initializing global logger with {:?}", options);
    with(|logger| logger.initialize(options))
}

/// Returns a copy of the process-wide options.
pub fn options() -> Options {
    with(|logger| logger.options().clone())
}

pub fn log(severity: Severity, template: &str, args: &[&dyn Loggable]) {
    with(|logger| {
        let _ = logger.log(severity, template, args);
    })
}

pub fn log_value(initial: &dyn Loggable, rest: &[&dyn Loggable]) {
    with(|logger| {
        let _ = logger.log_value(initial, rest);
    })
}

fn with<R, F: FnOnce(&mut Logger<Stdout>) -> R>(f: F) -> R {
    let mut logger = LOGGER.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut logger)
}

// ---

/// Collects arguments into a slice of [`Loggable`](crate::Loggable) references.
#[macro_export]
macro_rules! tl_args {
    ($($arg:expr),* $(,)?) => {
        &[$(&$arg as &dyn $crate::Loggable),*] as &[&dyn $crate::Loggable]
    };
}

#[macro_export]
macro_rules! tl_log {
    ($severity:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::log($severity, $fmt, $crate::tl_args![$($arg),*])
    };
}

#[macro_export]
macro_rules! tl_fatal {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::tl_log!($crate::Severity::Fatal, $fmt $(, $arg)*)
    };
}

#[macro_export]
macro_rules! tl_error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::tl_log!($crate::Severity::Error, $fmt $(, $arg)*)
    };
}

#[macro_export]
macro_rules! tl_warning {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::tl_log!($crate::Severity::Warning, $fmt $(, $arg)*)
    };
}

#[macro_export]
macro_rules! tl_info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::tl_log!($crate::Severity::Info, $fmt $(, $arg)*)
    };
}

#[macro_export]
macro_rules! tl_trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::tl_log!($crate::Severity::Trace, $fmt $(, $arg)*)
    };
}

#[macro_export]
macro_rules! tl_value {
    ($initial:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::log_value(&$initial, $crate::tl_args![$($arg),*])
    };
}
