//! The in-memory index of parsed registry entries.
//!
//! The [`Registry`] knows nothing about the source file format. It owns the
//! header metadata and the entries, enforces leaf uniqueness, and answers
//! lookups. All lookups are linear scans.

use std::time::Duration;

use chrono::NaiveDate;
use tracing::debug;
use url::Url;

use crate::domain::{
    entry::Entry,
    header::Header,
    identifier::{Identifier, ObjectIdentifier},
    prefix::Prefix,
};

/// A parsed Private Enterprise Numbers registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    header: Header,
    entries: Vec<Entry>,
    parse_duration: Duration,
}

impl Registry {
    /// Creates an empty registry with the given header.
    #[must_use]
    pub fn new(header: Header) -> Self {
        Self {
            header,
            entries: Vec::new(),
            parse_duration: Duration::ZERO,
        }
    }

    /// Inserts an entry.
    ///
    /// Returns `false`, leaving the registry unchanged, if an entry with the
    /// same leaf number is already present. The first entry seen wins.
    pub fn insert(&mut self, entry: Entry) -> bool {
        if self.position(&Identifier::from(entry.leaf)).is_some() {
            debug!(leaf = entry.leaf, "dropping duplicate entry");
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// The number of entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Finds an entry by any accepted identifier shape.
    ///
    /// Accepts anything convertible into an [`Identifier`]: an integer leaf,
    /// a decimal string, a dotted path string, an integer sequence or an
    /// [`ObjectIdentifier`].
    ///
    /// ```
    /// use pen::{Entry, Registry};
    ///
    /// let mut registry = Registry::default();
    /// registry.insert(Entry {
    ///     leaf: 99,
    ///     ..Entry::default()
    /// });
    ///
    /// assert!(registry.find_by_identifier(99_i64).is_some());
    /// assert!(registry.find_by_identifier("99").is_some());
    /// assert!(registry.find_by_identifier("1.3.6.1.4.1.99").is_some());
    /// assert!(registry.find_by_identifier(-99_i64).is_none());
    /// ```
    #[must_use]
    pub fn find_by_identifier(&self, identifier: impl Into<Identifier>) -> Option<&Entry> {
        self.position(&identifier.into())
            .map(|index| &self.entries[index])
    }

    /// Finds an entry by its slash-delimited path, ignoring case.
    ///
    /// Never matches if the registry has no prefix.
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<&Entry> {
        let prefix = self.prefix()?;
        let path = path.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.iri(prefix).to_lowercase() == path)
    }

    /// Finds the first entry listing `address`, ignoring case.
    ///
    /// `&` and `@` are treated as the same character on both sides, since
    /// the source file obfuscates addresses with `&`.
    #[must_use]
    pub fn find_by_email(&self, address: &str) -> Option<&Entry> {
        let address = normalize_email(address);
        self.entries.iter().find(|entry| {
            entry
                .emails
                .iter()
                .any(|email| normalize_email(email) == address)
        })
    }

    /// Finds the first entry whose contact name matches `name`, ignoring case
    /// and spaces.
    #[must_use]
    pub fn find_by_contact(&self, name: &str) -> Option<&Entry> {
        let name = normalize_contact(name);
        self.entries
            .iter()
            .find(|entry| normalize_contact(&entry.contact) == name)
    }

    /// The parsed header.
    #[must_use]
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// The document title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.header.title
    }

    /// The section name.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.header.section
    }

    /// When the registry was last updated, if the header said so.
    #[must_use]
    pub const fn last_updated(&self) -> Option<NaiveDate> {
        self.header.last_updated
    }

    /// Where the registry was published, if the header said so.
    #[must_use]
    pub const fn source(&self) -> Option<&Url> {
        self.header.source.as_ref()
    }

    /// The identifier root shared by all entries.
    #[must_use]
    pub const fn prefix(&self) -> Option<&Prefix> {
        self.header.prefix.as_ref()
    }

    /// How long the parse that produced this registry took.
    #[must_use]
    pub const fn parse_duration(&self) -> Duration {
        self.parse_duration
    }

    pub(crate) const fn set_parse_duration(&mut self, duration: Duration) {
        self.parse_duration = duration;
    }

    /// The full object identifier of `entry` under this registry's prefix.
    #[must_use]
    pub fn oid_of(&self, entry: &Entry) -> Option<ObjectIdentifier> {
        self.prefix().map(|prefix| entry.oid(prefix))
    }

    /// The slash-delimited path of `entry` under this registry's prefix.
    #[must_use]
    pub fn iri_of(&self, entry: &Entry) -> Option<String> {
        self.prefix().map(|prefix| entry.iri(prefix))
    }

    /// The ASN.1 value notation of `entry` under this registry's prefix.
    #[must_use]
    pub fn asn_of(&self, entry: &Entry) -> Option<String> {
        self.prefix().map(|prefix| entry.asn(prefix))
    }

    fn position(&self, identifier: &Identifier) -> Option<usize> {
        let root = self
            .prefix()
            .map_or(&EMPTY_OID, Prefix::oid);
        let leaf = identifier.resolve(root)?;
        self.entries.iter().position(|entry| entry.leaf == leaf)
    }
}

static EMPTY_OID: ObjectIdentifier = ObjectIdentifier::new(Vec::new());

fn normalize_email(address: &str) -> String {
    address.replace('&', "@").to_lowercase()
}

fn normalize_contact(name: &str) -> String {
    name.replace(' ', "").to_lowercase()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn prefix() -> Prefix {
        Prefix::new(
            "iso.org.dod.internet.private.enterprise",
            "1.3.6.1.4.1".parse().unwrap(),
        )
    }

    fn entry(leaf: u64, organization: &str, contact: &str, emails: &[&str]) -> Entry {
        Entry {
            leaf,
            organization: organization.to_string(),
            contact: contact.to_string(),
            emails: emails.iter().map(ToString::to_string).collect(),
        }
    }

    fn registry() -> Registry {
        let mut registry = Registry::new(Header {
            prefix: Some(prefix()),
            ..Header::default()
        });
        registry.insert(entry(0, "Reserved", "IANA", &["iana&iana.org"]));
        registry.insert(entry(
            99,
            "Example Org",
            "Jane Q Public",
            &["a.b&example.com", "ops@example.com"],
        ));
        registry.insert(entry(54399, "Other Org", "John Smith", &[]));
        registry
    }

    #[test]
    fn insert_rejects_duplicate_leaf() {
        let mut registry = registry();
        assert_eq!(registry.count(), 3);

        assert!(!registry.insert(entry(99, "Impostor", "Nobody", &[])));
        assert_eq!(registry.count(), 3);
        assert_eq!(
            registry.find_by_identifier(99_i64).unwrap().organization,
            "Example Org"
        );

        assert!(registry.insert(entry(100, "Newcomer", "Somebody", &[])));
        assert_eq!(registry.count(), 4);
    }

    #[test]
    fn insert_without_prefix_still_enforces_uniqueness() {
        let mut registry = Registry::default();
        assert!(registry.insert(entry(5, "A", "B", &[])));
        assert!(!registry.insert(entry(5, "C", "D", &[])));
        assert_eq!(registry.count(), 1);
    }

    #[test_case(Identifier::from(99_i64); "integer")]
    #[test_case(Identifier::from(99_u64); "unsigned integer")]
    #[test_case(Identifier::from("99"); "decimal string")]
    #[test_case(Identifier::from("1.3.6.1.4.1.99"); "dotted string")]
    #[test_case(Identifier::from(vec![1_i64, 3, 6, 1, 4, 1, 99]); "integer sequence")]
    #[test_case(Identifier::from(prefix().oid().child(99)); "structured")]
    fn find_by_identifier_accepts_every_shape(identifier: Identifier) {
        let registry = registry();
        let found = registry.find_by_identifier(identifier).unwrap();
        assert_eq!(found.organization, "Example Org");
    }

    #[test_case(Identifier::from(-99_i64); "negative integer")]
    #[test_case(Identifier::from(12345_i64); "absent leaf")]
    #[test_case(Identifier::from(vec![1_i64, 3, 6, 1, 4, 2, 99]); "wrong sequence prefix")]
    #[test_case(Identifier::from(vec![99_i64]); "bare sequence")]
    #[test_case(Identifier::from(ObjectIdentifier::new(vec![2, 99])); "wrong structured prefix")]
    #[test_case(Identifier::from("Example Org"); "not a number")]
    fn find_by_identifier_misses(identifier: Identifier) {
        assert!(registry().find_by_identifier(identifier).is_none());
    }

    #[test]
    fn leaf_zero_is_found() {
        assert_eq!(
            registry().find_by_identifier(0_i64).unwrap().organization,
            "Reserved"
        );
    }

    #[test]
    fn find_by_path_roundtrips_and_ignores_case() {
        let registry = registry();
        for entry in registry.entries() {
            let path = registry.iri_of(entry).unwrap();
            assert_eq!(registry.find_by_path(&path), Some(entry));
        }
        assert_eq!(
            registry
                .find_by_path("/ISO/Org/DOD/internet/private/enterprise/99")
                .unwrap()
                .leaf,
            99
        );
        assert!(registry.find_by_path("/iso/org/99").is_none());
    }

    #[test]
    fn find_by_path_without_prefix_misses() {
        let mut registry = Registry::default();
        registry.insert(entry(1, "A", "B", &[]));
        assert!(registry.find_by_path("/1").is_none());
    }

    #[test_case("A.B@EXAMPLE.COM"; "at sign upper case")]
    #[test_case("a.b&example.com"; "ampersand as stored")]
    #[test_case("ops&example.com"; "ampersand against stored at sign")]
    #[test_case("Ops@Example.com"; "second address")]
    fn find_by_email(query: &str) {
        assert_eq!(registry().find_by_email(query).unwrap().leaf, 99);
    }

    #[test]
    fn find_by_email_misses() {
        assert!(registry().find_by_email("nobody@example.com").is_none());
        assert!(registry().find_by_email("").is_none());
    }

    #[test_case("janeqpublic"; "squashed lower case")]
    #[test_case("Jane Q Public"; "as stored")]
    #[test_case("  JANE  Q PUBLIC "; "padded upper case")]
    fn find_by_contact(query: &str) {
        assert_eq!(registry().find_by_contact(query).unwrap().leaf, 99);
    }

    #[test]
    fn find_by_contact_misses() {
        assert!(registry().find_by_contact("Jane").is_none());
    }

    #[test]
    fn derived_identifiers_need_a_prefix() {
        let registry = registry();
        let entry = registry.find_by_identifier(54399_i64).unwrap();
        assert_eq!(
            registry.oid_of(entry).unwrap().to_string(),
            "1.3.6.1.4.1.54399"
        );
        assert_eq!(
            registry.asn_of(entry).unwrap(),
            "{iso(1) org(3) dod(6) internet(1) private(4) enterprise(1) 54399}"
        );

        let bare = Registry::default();
        assert!(bare.oid_of(entry).is_none());
        assert!(bare.iri_of(entry).is_none());
    }
}
