//! Testing utilities for internal use.

// local imports
use crate::settings::Options;

/// Trait that provides a method to generate a sample instance.
///
/// The `sample()` method should return a stable, deterministic instance
/// with reasonable values.
pub trait Sample {
    fn sample() -> Self;
}

impl Sample for Options {
    fn sample() -> Self {
        Options::new(" * tiny ({sev}) | ")
    }
}
