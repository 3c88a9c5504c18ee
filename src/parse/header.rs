//! Extraction of registry metadata from the fixed header block.
//!
//! The IANA file opens with ten lines. Odd lines are blank separators; the
//! even lines carry one field each:
//!
//! ```text
//!  1
//!  2 PRIVATE ENTERPRISE NUMBERS
//!  3
//!  4 (last updated 2024-05-01)
//!  5
//!  6 SMI Network Management Private Enterprise Codes:
//!  7
//!  8 Prefix: iso.org.dod.internet.private.enterprise (1.3.6.1.4.1)
//!  9
//! 10 This file is https://www.iana.org/assignments/enterprise-numbers.txt
//! ```

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;
use url::Url;

use super::line::Line;
use crate::domain::{Header, ObjectIdentifier, Prefix, identifier};

/// The number of lines at the top of the file reserved for the header.
pub const HEADER_LINES: usize = 10;

/// Length of the `Prefix: ` label that opens the prefix line.
const PREFIX_LABEL_LEN: usize = 8;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A header field, identified by the 1-indexed line it lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Line 2: the document title.
    Title,
    /// Line 4: the bracketed last-updated date.
    LastUpdated,
    /// Line 6: the section name.
    Section,
    /// Line 8: the identifier prefix.
    Prefix,
    /// Line 10: the source reference.
    Source,
}

impl Field {
    /// The field carried by a 1-indexed line number, if any.
    #[must_use]
    pub const fn at(line_number: usize) -> Option<Self> {
        match line_number {
            2 => Some(Self::Title),
            4 => Some(Self::LastUpdated),
            6 => Some(Self::Section),
            8 => Some(Self::Prefix),
            10 => Some(Self::Source),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::LastUpdated => "last-updated date",
            Self::Section => "section",
            Self::Prefix => "prefix",
            Self::Source => "source reference",
        };
        f.write_str(name)
    }
}

/// Errors raised while extracting a header field.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// The date line had nothing to parse once its frame was removed.
    #[error("line {line}: no last-updated date in '{text}'")]
    MissingDate {
        /// 1-indexed line number.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// The last token of the date line was not a `YYYY-MM-DD` date.
    #[error("line {line}: invalid last-updated date in '{text}'")]
    Date {
        /// 1-indexed line number.
        line: usize,
        /// The offending line.
        text: String,
        /// The underlying date parse failure, if the token had the right
        /// shape.
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// The section line was too short to hold a name.
    #[error("line {line}: section name missing from '{text}'")]
    Section {
        /// 1-indexed line number.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// The prefix line was too short, or lacked either of its tokens.
    #[error("line {line}: expected a label path and a bracketed OID in '{text}'")]
    Prefix {
        /// 1-indexed line number.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// The bracketed OID on the prefix line was not dotted-numeric.
    #[error("line {line}: invalid prefix OID in '{text}'")]
    PrefixOid {
        /// 1-indexed line number.
        line: usize,
        /// The offending line.
        text: String,
        /// The underlying OID parse failure.
        #[source]
        source: identifier::ParseError,
    },

    /// The source line was too short to hold a reference.
    #[error("line {line}: source reference missing from '{text}'")]
    MissingSource {
        /// 1-indexed line number.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// The last token of the source line was not a URL.
    #[error("line {line}: invalid source reference in '{text}'")]
    Source {
        /// 1-indexed line number.
        line: usize,
        /// The offending line.
        text: String,
        /// The underlying URL parse failure.
        #[source]
        source: url::ParseError,
    },
}

impl HeaderError {
    /// The header field that failed to parse.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::MissingDate { .. } | Self::Date { .. } => Field::LastUpdated,
            Self::Section { .. } => Field::Section,
            Self::Prefix { .. } | Self::PrefixOid { .. } => Field::Prefix,
            Self::MissingSource { .. } | Self::Source { .. } => Field::Source,
        }
    }

    /// The 1-indexed line number of the failing header line.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MissingDate { line, .. }
            | Self::Date { line, .. }
            | Self::Section { line, .. }
            | Self::Prefix { line, .. }
            | Self::PrefixOid { line, .. }
            | Self::MissingSource { line, .. }
            | Self::Source { line, .. } => *line,
        }
    }
}

/// Updates `header` from the line at 1-indexed `line_number`.
///
/// Lines that carry no header field are ignored.
///
/// # Errors
///
/// Returns an error if the line carries a field and that field fails its
/// validation. See [`HeaderError`].
pub fn extract(header: &mut Header, line_number: usize, line: Line) -> Result<(), HeaderError> {
    let Some(field) = Field::at(line_number) else {
        return Ok(());
    };
    let text = line.as_str();

    match field {
        Field::Title => header.title = text.to_string(),
        Field::LastUpdated => header.last_updated = Some(last_updated(line_number, text)?),
        Field::Section => header.section = section(line_number, text)?.to_string(),
        Field::Prefix => header.prefix = Some(prefix(line_number, text)?),
        Field::Source => header.source = Some(source(line_number, text)?),
    }

    debug!(line = line_number, %field, value = text, "header field");
    Ok(())
}

fn last_updated(line: usize, text: &str) -> Result<NaiveDate, HeaderError> {
    let token = strip_frame(text)
        .and_then(|inner| inner.split(' ').next_back())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| HeaderError::MissingDate {
            line,
            text: text.to_string(),
        })?;

    let invalid = |source| HeaderError::Date {
        line,
        text: text.to_string(),
        source,
    };
    if !is_padded_date(token) {
        return Err(invalid(None));
    }
    NaiveDate::parse_from_str(token, DATE_FORMAT).map_err(|source| invalid(Some(source)))
}

/// `chrono` accepts unpadded fields and signed years, so the shape is checked
/// first.
fn is_padded_date(token: &str) -> bool {
    token.len() == 10
        && token.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

fn section(line: usize, text: &str) -> Result<&str, HeaderError> {
    let mut chars = text.chars();
    chars.next_back();
    Some(chars.as_str())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| HeaderError::Section {
            line,
            text: text.to_string(),
        })
}

fn prefix(line: usize, text: &str) -> Result<Prefix, HeaderError> {
    let malformed = || HeaderError::Prefix {
        line,
        text: text.to_string(),
    };

    let rest = text.get(PREFIX_LABEL_LEN..).ok_or_else(malformed)?;
    let mut tokens = rest.split_whitespace();
    let (Some(labels), Some(bracketed)) = (tokens.next(), tokens.next()) else {
        return Err(malformed());
    };
    if labels.len() <= 2 || bracketed.len() <= 2 {
        return Err(malformed());
    }

    let oid = strip_frame(bracketed)
        .ok_or_else(malformed)?
        .parse::<ObjectIdentifier>()
        .map_err(|source| HeaderError::PrefixOid {
            line,
            text: text.to_string(),
            source,
        })?;

    Ok(Prefix::new(labels, oid))
}

fn source(line: usize, text: &str) -> Result<Url, HeaderError> {
    let token = text
        .split_whitespace()
        .next_back()
        .filter(|_| text.chars().nth(1).is_some())
        .ok_or_else(|| HeaderError::MissingSource {
            line,
            text: text.to_string(),
        })?;

    Url::parse(token).map_err(|source| HeaderError::Source {
        line,
        text: text.to_string(),
        source,
    })
}

/// Removes the first and last character, e.g. the brackets around
/// `(last updated 2024-05-01)`. Returns `None` for text shorter than two
/// characters.
fn strip_frame(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    chars.next()?;
    chars.next_back()?;
    Some(chars.as_str())
}
