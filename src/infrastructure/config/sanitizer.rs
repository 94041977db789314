//! Whitespace stripping for raw input lines.

use std::borrow::Cow;

/// Turns a raw input line into its whitespace-stripped form.
///
/// The loader decides blank and comment lines on the stripped form, and
/// takes the value from it, so an implementation controls which
/// characters can ever reach a [`crate::ConfigRecord`].
pub trait LineSanitizer: Send + Sync {
    /// Strip `raw`, borrowing when nothing had to be removed.
    fn sanitize<'a>(&self, raw: &'a str) -> Cow<'a, str>;
}

/// Removes every whitespace character, wherever it occurs in the line.
///
/// `"  foo.csv   # crop list "` becomes `"foo.csv#croplist"`, so the value
/// left of `#` carries no padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceStripper;

impl LineSanitizer for WhitespaceStripper {
    fn sanitize<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if raw.chars().any(char::is_whitespace) {
            Cow::Owned(raw.chars().filter(|c| !c.is_whitespace()).collect())
        } else {
            Cow::Borrowed(raw)
        }
    }
}
