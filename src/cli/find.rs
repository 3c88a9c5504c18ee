use std::process;

use clap::Parser;
use pen::{Entry, Registry};
use tracing::instrument;

use super::{OutputFormat, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Look up a single registry entry")]
pub struct Find {
    /// Number, OID, path, email address or contact name to search for
    query: String,

    /// How to interpret the query
    #[arg(long, value_name = "KEY", default_value = "oid")]
    by: Key,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Key {
    /// Leaf number or dotted OID
    #[default]
    Oid,
    /// Slash-delimited path, e.g. /iso/org/dod/internet/private/enterprise/1
    Iri,
    /// Email address (`&` and `@` are interchangeable)
    Email,
    /// Contact name (spaces and case are ignored)
    Contact,
}

impl Find {
    #[instrument(level = "debug", skip(registry))]
    pub fn run(self, registry: &Registry) -> anyhow::Result<()> {
        let query = self.query.as_str();
        let found = match self.by {
            Key::Oid => registry.find_by_identifier(query),
            Key::Iri => registry.find_by_path(query),
            Key::Email => registry.find_by_email(query),
            Key::Contact => registry.find_by_contact(query),
        };

        let Some(entry) = found else {
            eprintln!("{}", format!("No entry matches '{query}'").warning());
            process::exit(1);
        };

        match self.output {
            OutputFormat::Pretty => Self::output_pretty(registry, entry),
            OutputFormat::Json => Self::output_json(registry, entry)?,
        }
        Ok(())
    }

    fn output_pretty(registry: &Registry, entry: &Entry) {
        println!("# {}", entry.leaf);
        println!("{}\n", entry.organization);

        println!("{}", "Contact".dim());
        println!("  Name:   {}", entry.contact);
        if !entry.emails.is_empty() {
            println!("  Emails: {}", entry.emails_joined());
        }

        if let Some(prefix) = registry.prefix() {
            println!("\n{}", "Identifiers".dim());
            println!("  OID: {}", entry.oid(prefix).to_string().info());
            println!("  IRI: {}", entry.iri(prefix));
            println!("  ASN: {}", entry.asn(prefix));
        }
    }

    fn output_json(registry: &Registry, entry: &Entry) -> anyhow::Result<()> {
        let output = serde_json::json!({
            "entry": entry,
            "oid": registry.oid_of(entry).map(|oid| oid.to_string()),
            "iri": registry.iri_of(entry),
            "asn": registry.asn_of(entry),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
