//! IANA Private Enterprise Numbers
//!
//! Parses the plain-text PEN registry into an in-memory [`Registry`] that can
//! be queried by number, OID, path, email address or contact name.

pub mod domain;
pub use domain::{Config, Entry, Header, Identifier, ObjectIdentifier, Prefix, Registry};

/// Parsing of the registry text format.
pub mod parse;
pub use parse::{Error, load, parse_reader, parse_str};
