use std::{fmt, num::ParseIntError, str::FromStr};

use serde::Serialize;

/// A dotted-numeric hierarchical identifier, e.g. `1.3.6.1.4.1.54399`.
///
/// Arcs are stored in order from the root. An empty identifier is allowed as
/// a value (it is what an unset registry prefix looks like) but never parses
/// from a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct ObjectIdentifier(Vec<u64>);

impl ObjectIdentifier {
    /// Creates an identifier from its arcs.
    #[must_use]
    pub const fn new(arcs: Vec<u64>) -> Self {
        Self(arcs)
    }

    /// Returns the arcs of the identifier.
    #[must_use]
    pub fn arcs(&self) -> &[u64] {
        &self.0
    }

    /// Returns the number of arcs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the identifier has no arcs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new identifier with `leaf` appended.
    #[must_use]
    pub fn child(&self, leaf: u64) -> Self {
        let mut arcs = self.0.clone();
        arcs.push(leaf);
        Self(arcs)
    }

    /// Splits the identifier into everything-but-the-last arc and the last
    /// arc. Returns `None` for identifiers with fewer than two arcs, since a
    /// bare prefix does not name a leaf.
    #[must_use]
    pub fn split_leaf(&self) -> Option<(&[u64], u64)> {
        match self.0.split_last() {
            Some((leaf, parent)) if !parent.is_empty() => Some((parent, *leaf)),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut arcs = self.0.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{first}")?;
            for arc in arcs {
                write!(f, ".{arc}")?;
            }
        }
        Ok(())
    }
}

impl From<ObjectIdentifier> for String {
    fn from(oid: ObjectIdentifier) -> Self {
        oid.to_string()
    }
}

impl From<Vec<u64>> for ObjectIdentifier {
    fn from(arcs: Vec<u64>) -> Self {
        Self(arcs)
    }
}

impl TryFrom<&[i64]> for ObjectIdentifier {
    type Error = NegativeArcError;

    fn try_from(arcs: &[i64]) -> Result<Self, Self::Error> {
        arcs.iter()
            .map(|&arc| u64::try_from(arc).map_err(|_| NegativeArcError(arc)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Error returned when an integer sequence contains a negative arc.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("object identifier arcs must be non-negative, got {0}")]
pub struct NegativeArcError(i64);

/// Errors that can occur when parsing a dotted object identifier.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty.
    #[error("object identifier is empty")]
    Empty,

    /// Two dots in a row, or a leading/trailing dot.
    #[error("object identifier '{0}' contains an empty arc")]
    EmptyArc(String),

    /// An arc was not a non-negative integer.
    #[error("object identifier '{oid}' has an invalid arc '{arc}'")]
    Arc {
        /// The full input.
        oid: String,
        /// The offending arc.
        arc: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for ObjectIdentifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        s.split('.')
            .map(|arc| {
                if arc.is_empty() {
                    return Err(ParseError::EmptyArc(s.to_string()));
                }
                arc.parse::<u64>().map_err(|source| ParseError::Arc {
                    oid: s.to_string(),
                    arc: arc.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// A lookup key for a registry entry, in any of the accepted shapes.
///
/// Every shape reduces to a leaf number (see [`Identifier::resolve`]):
///
/// - [`Identifier::Integer`]: the leaf itself, e.g. `54399`
/// - [`Identifier::Decimal`]: the leaf as text, e.g. `"54399"`
/// - [`Identifier::Dotted`]: a dotted path whose final component is the leaf,
///   e.g. `"1.3.6.1.4.1.54399"`
/// - [`Identifier::Sequence`]: raw integers forming a full identifier, e.g.
///   `[1, 3, 6, 1, 4, 1, 54399]`
/// - [`Identifier::Structured`]: a full [`ObjectIdentifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// A bare leaf number. Negative values never match.
    Integer(i64),
    /// A leaf number written as text.
    Decimal(String),
    /// A dotted path; only its final component is used.
    Dotted(String),
    /// A full identifier as raw integers; the prefix must match.
    Sequence(Vec<i64>),
    /// A full structured identifier; the prefix must match.
    Structured(ObjectIdentifier),
}

impl Identifier {
    /// Reduces the identifier to a leaf number, given the registry's OID
    /// prefix.
    ///
    /// Returns `None` when the identifier cannot name any entry under
    /// `prefix`: a negative integer, unparseable text, a full identifier with
    /// a different prefix, or a bare prefix with no leaf.
    #[must_use]
    pub fn resolve(&self, prefix: &ObjectIdentifier) -> Option<u64> {
        match self {
            Self::Integer(value) => u64::try_from(*value).ok(),
            Self::Decimal(text) => text.parse::<u64>().ok(),
            // A dotted path without dots is a plain number, which the last
            // component covers too.
            Self::Dotted(text) => text
                .rsplit('.')
                .next()
                .and_then(|last| last.parse::<u64>().ok()),
            Self::Sequence(arcs) => {
                if arcs.len() <= 1 {
                    return None;
                }
                let oid = ObjectIdentifier::try_from(arcs.as_slice()).ok()?;
                Self::Structured(oid).resolve(prefix)
            }
            Self::Structured(oid) => {
                let (parent, leaf) = oid.split_leaf()?;
                (parent == prefix.arcs()).then_some(leaf)
            }
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Decimal(value.to_string()), Self::Integer)
    }
}

impl From<&str> for Identifier {
    fn from(text: &str) -> Self {
        if text.contains('.') {
            Self::Dotted(text.to_string())
        } else {
            Self::Decimal(text.to_string())
        }
    }
}

impl From<String> for Identifier {
    fn from(text: String) -> Self {
        if text.contains('.') {
            Self::Dotted(text)
        } else {
            Self::Decimal(text)
        }
    }
}

impl From<Vec<i64>> for Identifier {
    fn from(arcs: Vec<i64>) -> Self {
        Self::Sequence(arcs)
    }
}

impl From<ObjectIdentifier> for Identifier {
    fn from(oid: ObjectIdentifier) -> Self {
        Self::Structured(oid)
    }
}
