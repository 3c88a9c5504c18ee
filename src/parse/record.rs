//! Assembly of a single registry entry from its block of lines.

use std::{io, num::ParseIntError};

use tracing::{trace, warn};

use super::{Error, cursor::Cursor, line::Line};
use crate::domain::{Config, Entry};

/// Names of the lines that follow an entry marker, in order.
const FIELDS: [&str; 3] = ["organization", "contact", "emails"];

/// Errors raised while assembling an entry.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The entry marker is all digits but does not fit a leaf number.
    #[error("line {line}: entry number '{text}' is out of range")]
    Marker {
        /// 1-indexed line number of the marker.
        line: usize,
        /// The marker text.
        text: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The input ended before the entry was complete.
    #[error("line {line}: entry {leaf} ends before its {missing} line")]
    Truncated {
        /// 1-indexed line number of the marker.
        line: usize,
        /// Leaf number of the incomplete entry.
        leaf: u64,
        /// The first field with no line.
        missing: &'static str,
    },

    /// The line after an entry is neither a marker, the trailer, nor the end
    /// of the input.
    #[error("line {line}: unexpected '{text}' after entry {leaf}")]
    Boundary {
        /// 1-indexed line number of the unexpected line.
        line: usize,
        /// Leaf number of the preceding entry.
        leaf: u64,
        /// The unexpected line.
        text: String,
    },
}

/// Builds an [`Entry`] from a marker line and the three lines after it.
///
/// The three lines are consumed whatever they contain.
pub(crate) fn assemble<I>(
    line_number: usize,
    marker: Line,
    cursor: &mut Cursor<I>,
    config: &Config,
) -> Result<Entry, Error>
where
    I: Iterator<Item = io::Result<String>>,
{
    let leaf = marker
        .parse::<u64>()
        .map_err(|source| RecordError::Marker {
            line: line_number,
            text: marker.to_string(),
            source,
        })?;

    let mut fields: [Option<String>; 3] = Default::default();
    for slot in &mut fields {
        let Some(next) = cursor.next_line() else {
            break;
        };
        let (_, text) = next?;
        *slot = Some(text);
    }

    if let Some(missing) = FIELDS
        .iter()
        .zip(&fields)
        .find_map(|(name, field)| field.is_none().then_some(*name))
    {
        if config.strict_records {
            return Err(RecordError::Truncated {
                line: line_number,
                leaf,
                missing,
            }
            .into());
        }
        warn!(line = line_number, leaf, missing, "accepting truncated entry");
    }

    let [organization, contact, emails] = fields.map(|field| field.unwrap_or_default());
    let entry = Entry {
        leaf,
        organization: body(&organization).to_string(),
        contact: body(&contact).to_string(),
        emails: split_emails(body(&emails), config.keep_empty_emails),
    };

    if config.verify_boundaries {
        check_boundary(leaf, cursor, config)?;
    }

    trace!(leaf, organization = %entry.organization, "assembled entry");
    Ok(entry)
}

fn body(text: &str) -> &str {
    Line::new(text).trim_leading_spaces().as_str()
}

fn split_emails(text: &str, keep_empty: bool) -> Vec<String> {
    if text.is_empty() && !keep_empty {
        return Vec::new();
    }
    text.replace(' ', "")
        .split(',')
        .filter(|email| keep_empty || !email.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn check_boundary<I>(leaf: u64, cursor: &mut Cursor<I>, config: &Config) -> Result<(), Error>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(text) = cursor.peek_content()? else {
        return Ok(());
    };
    let next = Line::new(text);
    if next.is_entry_start() || next.as_str() == config.trailer {
        return Ok(());
    }
    let text = next.to_string();
    Err(RecordError::Boundary {
        line: cursor.number() + 1,
        leaf,
        text,
    }
    .into())
}
