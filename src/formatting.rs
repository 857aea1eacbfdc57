// std imports
use std::iter::repeat_n;

// third-party imports
use itertools::Itertools;
use memchr::memmem;

// ---

/// Formatter substitutes placeholder characters in a message template
/// with argument renderings, left to right.
#[derive(Clone, Debug)]
pub struct Formatter {
    placeholder: char,
    encoded: [u8; 4],
}

impl Formatter {
    pub fn new(placeholder: char) -> Self {
        let mut encoded = [0; 4];
        placeholder.encode_utf8(&mut encoded);
        Self { placeholder, encoded }
    }

    #[inline]
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Appends `template` to `buf`, replacing each placeholder occurrence
    /// with the next argument.
    ///
    /// Stops substituting as soon as either side runs out: excess arguments
    /// are dropped, and once arguments are exhausted the remainder of the
    /// template is appended verbatim, unmatched placeholders included.
    pub fn format<S: AsRef<str>>(&self, buf: &mut String, template: &str, args: &[S]) {
        let needle = &self.encoded[..self.placeholder.len_utf8()];
        let finder = memmem::Finder::new(needle);
        let mut rest = template;
        let mut args = args.iter();

        loop {
            let Some(pos) = finder.find(rest.as_bytes()) else {
                break;
            };
            let Some(arg) = args.next() else {
                break;
            };

            buf.push_str(&rest[..pos]);
            buf.push_str(arg.as_ref());
            rest = &rest[pos + needle.len()..];
        }

        buf.push_str(rest);
    }

    /// Builds a template of `n` placeholder-and-space tokens capped with
    /// one final placeholder, e.g. `"@ @ @"` for `n == 2`.
    pub fn value_template(&self, n: usize) -> String {
        repeat_n(self.placeholder, n + 1).join(" ")
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new('@')
    }
}
