use serde::Serialize;

use super::{identifier::ObjectIdentifier, prefix::Prefix};

/// One organization's registration in the registry.
///
/// The source file lays each entry out over four lines, indented by role:
///
/// ```text
/// 54399                  <- leaf number, no indent
///   Example Org          <- organization, two spaces
///     Jane Doe           <- contact, four spaces
///       jane&example.com <- emails, six spaces, comma separated
/// ```
///
/// Entries know only their leaf number. Full identifiers are derived from the
/// [`Prefix`] of the registry that owns them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The registry-unique final arc of the entry's identifier.
    pub leaf: u64,
    /// The registered organization name.
    pub organization: String,
    /// The registered contact name.
    pub contact: String,
    /// Contact email addresses, as written in the source (`&` in place of
    /// `@` is common).
    pub emails: Vec<String>,
}

impl Entry {
    /// The full object identifier of this entry under `prefix`.
    #[must_use]
    pub fn oid(&self, prefix: &Prefix) -> ObjectIdentifier {
        prefix.oid().child(self.leaf)
    }

    /// The slash-delimited path of this entry under `prefix`, e.g.
    /// `/iso/org/dod/internet/private/enterprise/54399`.
    #[must_use]
    pub fn iri(&self, prefix: &Prefix) -> String {
        format!("{}/{}", prefix.iri(), self.leaf)
    }

    /// The ASN.1 value notation of this entry under `prefix`.
    #[must_use]
    pub fn asn(&self, prefix: &Prefix) -> String {
        let components = prefix.asn_components();
        if components.is_empty() {
            format!("{{{}}}", self.leaf)
        } else {
            format!("{{{components} {}}}", self.leaf)
        }
    }

    /// Emails joined with commas.
    #[must_use]
    pub fn emails_joined(&self) -> String {
        self.emails.join(",")
    }
}
