use chrono::NaiveDate;
use serde::Serialize;
use url::Url;

use super::prefix::Prefix;

/// Registry-wide metadata carried by the first lines of the source file.
///
/// Fields whose header line was blank in the source are left unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Document title, e.g. `PRIVATE ENTERPRISE NUMBERS`.
    pub title: String,
    /// Date the registry was last modified.
    pub last_updated: Option<NaiveDate>,
    /// Section name, e.g. `SMI Network Management Private Enterprise Codes`.
    pub section: String,
    /// Identifier root shared by all entries.
    pub prefix: Option<Prefix>,
    /// Where the file was published.
    pub source: Option<Url>,
}
