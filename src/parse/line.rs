use std::{fmt, ops::Deref};

/// A single line of registry text, without its line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a>(&'a str);

impl<'a> Line<'a> {
    /// Wraps raw line text. A trailing `\r` left over from CRLF input is
    /// dropped.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Returns the line as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns `true` if the line has no characters at all.
    ///
    /// A line holding only spaces is not blank.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the line is a non-empty run of ASCII digits, which
    /// marks the start of an entry.
    #[must_use]
    pub fn is_entry_start(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Returns `true` if the line begins with `prefix`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Returns `true` if `needle` occurs anywhere in the line.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// Strips leading space characters. Tabs and other whitespace are kept.
    #[must_use]
    pub fn trim_leading_spaces(self) -> Self {
        Self(self.0.trim_start_matches(' '))
    }
}

impl Deref for Line<'_> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}
