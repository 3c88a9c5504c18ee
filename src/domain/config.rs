use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for parsing a registry file.
///
/// These settings decide how forgiving the parser is with entries that do not
/// follow the four-line layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Whether an entry cut short by the end of the input is an error.
    ///
    /// When `false`, the missing fields are left empty and parsing carries
    /// on.
    pub strict_records: bool,

    /// Whether empty tokens from stray commas are kept in the email list.
    pub keep_empty_emails: bool,

    /// Whether to check what follows each entry.
    ///
    /// When `true`, the first non-blank line after an entry must be another
    /// entry marker, the [`trailer`](Self::trailer) line, or the end of the
    /// input. This catches entries with a missing line, which would otherwise
    /// silently swallow the next entry's marker.
    pub verify_boundaries: bool,

    /// The line that closes the registry file.
    pub trailer: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_records: true,
            keep_empty_emails: false,
            verify_boundaries: false,
            trailer: default_trailer(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }
}

const fn default_strict_records() -> bool {
    true
}

fn default_trailer() -> String {
    "End of Document".to_string()
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_strict_records")]
        strict_records: bool,

        #[serde(default)]
        keep_empty_emails: bool,

        #[serde(default)]
        verify_boundaries: bool,

        #[serde(default = "default_trailer")]
        trailer: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                strict_records,
                keep_empty_emails,
                verify_boundaries,
                trailer,
            } => Self {
                strict_records,
                keep_empty_emails,
                verify_boundaries,
                trailer,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            strict_records: config.strict_records,
            keep_empty_emails: config.keep_empty_emails,
            verify_boundaries: config.verify_boundaries,
            trailer: config.trailer,
        }
    }
}
