//! Domain models for the enterprise number registry.
//!
//! This module contains the registry index, its entries, the identifier types
//! used to look entries up, and parser configuration.

mod config;
pub use config::Config;

/// Registry entries.
pub mod entry;
pub use entry::Entry;

mod header;
pub use header::Header;

/// Object identifiers and the polymorphic lookup key.
pub mod identifier;
pub use identifier::{Identifier, ObjectIdentifier};

mod prefix;
pub use prefix::Prefix;

pub mod registry;
pub use registry::Registry;
