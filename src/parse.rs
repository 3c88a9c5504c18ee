//! Parsing of the IANA Private Enterprise Numbers text file.
//!
//! The file is read as a forward-only sequence of lines. The first
//! [`HEADER_LINES`] lines are handed to the [header extractor](header). After
//! that, every line made only of digits opens a four-line entry block which is
//! handed to the record assembler; all other lines are skipped.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    time::Instant,
};

use tracing::{info, instrument, trace};

use crate::domain::{Config, Header, Registry};

mod cursor;
/// Header block extraction.
pub mod header;
/// Line classification.
pub mod line;
/// Entry block assembly.
pub mod record;

use cursor::Cursor;
pub use header::{HEADER_LINES, HeaderError};
use line::Line;
pub use record::RecordError;

/// Errors that can occur while parsing a registry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The registry file does not exist.
    #[error("registry file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The registry could not be read.
    #[error("failed to read registry")]
    Io(#[from] io::Error),

    /// A header field was malformed.
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// An entry was malformed.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Reads and parses the registry file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if its contents
/// fail to parse. No partial registry is returned.
#[instrument(level = "debug", skip(config))]
pub fn load(path: &Path, config: &Config) -> Result<Registry, Error> {
    let file = File::open(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(error),
    })?;
    parse_reader(BufReader::new(file), config)
}

/// Parses a registry from a buffered reader.
///
/// # Errors
///
/// See [`parse_lines`].
pub fn parse_reader<R: BufRead>(reader: R, config: &Config) -> Result<Registry, Error> {
    parse_lines(reader.lines(), config)
}

/// Parses a registry held in memory, using the default [`Config`].
///
/// # Errors
///
/// See [`parse_lines`].
pub fn parse_str(text: &str) -> Result<Registry, Error> {
    parse_lines(text.lines().map(|line| Ok(line.to_string())), &Config::default())
}

/// Parses a registry from a sequence of lines.
///
/// Read errors from the sequence are passed through unchanged.
///
/// # Errors
///
/// Returns an error if reading a line fails, if a header field is malformed,
/// or if an entry is malformed under the rules of `config`.
#[instrument(level = "debug", skip_all)]
pub fn parse_lines<I>(lines: I, config: &Config) -> Result<Registry, Error>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let started = Instant::now();
    let mut cursor = Cursor::new(lines);

    let mut header = Header::default();
    while cursor.number() < HEADER_LINES {
        let Some(next) = cursor.next_line() else {
            break;
        };
        let (number, text) = next?;
        let line = Line::new(&text);
        if !line.is_blank() {
            header::extract(&mut header, number, line)?;
        }
    }

    let mut registry = Registry::new(header);
    while let Some(next) = cursor.next_line() {
        let (number, text) = next?;
        let line = Line::new(&text);
        if line.is_blank() {
            continue;
        }
        if !line.is_entry_start() {
            trace!(line = number, text = %text, "skipping line outside an entry");
            continue;
        }
        let entry = record::assemble(number, line, &mut cursor, config)?;
        registry.insert(entry);
    }

    registry.set_parse_duration(started.elapsed());
    info!(
        entries = registry.count(),
        elapsed = ?registry.parse_duration(),
        "parsed registry"
    );
    Ok(registry)
}
