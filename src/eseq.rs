// std imports
use std::fmt::{self, Write};

// ---

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Reset = 0,
    Bold = 1,
}

#[repr(u8)]
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleCode {
    Mode(Mode),
    Foreground(Color),
}

impl StyleCode {
    fn render(&self, buf: &mut String) {
        match self {
            Self::Mode(mode) => push_code(buf, *mode as u8),
            Self::Foreground(color) => push_code(buf, 30 + *color as u8),
        }
    }
}

impl From<Mode> for StyleCode {
    fn from(mode: Mode) -> Self {
        StyleCode::Mode(mode)
    }
}

impl Color {
    pub fn fg(self) -> StyleCode {
        StyleCode::Foreground(self)
    }
}

// ---

/// Sequence is a rendered SGR escape sequence, e.g. `ESC[1;31m`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence(String);

impl Sequence {
    pub fn reset() -> Self {
        Mode::Reset.into()
    }

    pub fn new<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = StyleCode>,
    {
        let mut buf = String::with_capacity(16);
        begin(&mut buf);
        for (i, code) in codes.into_iter().enumerate() {
            if i != 0 {
                next(&mut buf);
            }
            code.render(&mut buf);
        }
        end(&mut buf);
        Self(buf)
    }
}

impl<T: Into<StyleCode>> From<T> for Sequence {
    fn from(code: T) -> Self {
        Self::new([code.into()])
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---

#[inline]
fn push_code(buf: &mut String, code: u8) {
    // writing into a String cannot fail
    let _ = write!(buf, "{}", code);
}

#[inline]
fn begin(buf: &mut String) {
    buf.push('\x1b');
    buf.push('[');
}

#[inline]
fn next(buf: &mut String) {
    buf.push(';');
}

#[inline]
fn end(buf: &mut String) {
    buf.push('m');
}

#[cfg(test)]
mod tests;
