use std::fmt::Write as _;

use serde::Serialize;

use super::identifier::ObjectIdentifier;

/// The identifier root shared by every entry in a registry.
///
/// The IANA file names it twice on its `Prefix:` line, once as a dotted label
/// path (`iso.org.dod.internet.private.enterprise`) and once as a dotted OID
/// (`1.3.6.1.4.1`). Each [`Entry`](super::Entry) derives its full identifiers
/// by appending its leaf number to these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Prefix {
    oid: ObjectIdentifier,
    iri: String,
}

impl Prefix {
    /// Creates a prefix from a dotted label path and an OID.
    ///
    /// The label path is stored in slash form, so
    /// `iso.org.dod` becomes `/iso/org/dod`.
    #[must_use]
    pub fn new(labels: &str, oid: ObjectIdentifier) -> Self {
        Self {
            oid,
            iri: format!("/{}", labels.replace('.', "/")),
        }
    }

    /// The OID form of the prefix.
    #[must_use]
    pub const fn oid(&self) -> &ObjectIdentifier {
        &self.oid
    }

    /// The slash-delimited path form of the prefix.
    #[must_use]
    pub fn iri(&self) -> &str {
        &self.iri
    }

    /// The prefix in ASN.1 value notation without a closing leaf, pairing
    /// each path label with its arc, e.g.
    /// `{iso(1) org(3) dod(6) internet(1) private(4) enterprise(1)}`.
    ///
    /// Names come from the labels in the file, so the second arc reads
    /// `org(3)` rather than the registered `identified-organization(3)`.
    /// Arcs without a matching label are written as bare numbers.
    #[must_use]
    pub fn asn(&self) -> String {
        format!("{{{}}}", self.asn_components())
    }

    pub(crate) fn asn_components(&self) -> String {
        let mut labels = self.iri.split('/').filter(|label| !label.is_empty());
        let mut out = String::new();
        for arc in self.oid.arcs() {
            if !out.is_empty() {
                out.push(' ');
            }
            match labels.next() {
                Some(label) => {
                    let _ = write!(out, "{label}({arc})");
                }
                None => {
                    let _ = write!(out, "{arc}");
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enterprise() -> Prefix {
        Prefix::new(
            "iso.org.dod.internet.private.enterprise",
            "1.3.6.1.4.1".parse().unwrap(),
        )
    }

    #[test]
    fn iri_uses_slashes() {
        assert_eq!(
            enterprise().iri(),
            "/iso/org/dod/internet/private/enterprise"
        );
    }

    #[test]
    fn asn_pairs_labels_with_arcs() {
        assert_eq!(
            enterprise().asn(),
            "{iso(1) org(3) dod(6) internet(1) private(4) enterprise(1)}"
        );
    }

    #[test]
    fn asn_tolerates_missing_labels() {
        let prefix = Prefix::new("iso.org", "1.3.6".parse().unwrap());
        assert_eq!(prefix.asn(), "{iso(1) org(3) 6}");
    }
}
