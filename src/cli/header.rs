use clap::Parser;
use pen::Registry;
use tracing::instrument;

use super::{OutputFormat, terminal::Colorize};

/// Display format for the last-updated date.
const DATE_FORMAT: &str = "%a %b %e %Y";

#[derive(Debug, Parser, Default)]
#[command(about = "Show registry metadata and parse statistics")]
pub struct Header {
    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

impl Header {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, registry: &Registry) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Pretty => Self::output_pretty(registry),
            OutputFormat::Json => Self::output_json(registry)?,
        }
        Ok(())
    }

    fn output_pretty(registry: &Registry) {
        println!("{}", registry.title());
        println!("{}\n", registry.section().dim());

        println!("{}", "Parser".dim());
        if let Some(source) = registry.source() {
            println!("  Source:       {source}");
        }
        if let Some(date) = registry.last_updated() {
            println!("  Last updated: {}", date.format(DATE_FORMAT));
        }
        println!("  Entries:      {}", registry.count());
        let elapsed = registry.parse_duration();
        println!(
            "  Duration:     {} ms. (~{} sec.)",
            elapsed.as_millis(),
            elapsed.as_secs()
        );

        if let Some(prefix) = registry.prefix() {
            println!("\n{}", "Prefix".dim());
            println!("  OID: {}", prefix.oid().to_string().info());
            println!("  IRI: {}", prefix.iri());
            println!("  ASN: {}", prefix.asn());
        }
    }

    fn output_json(registry: &Registry) -> anyhow::Result<()> {
        let output = serde_json::json!({
            "header": registry.header(),
            "entries": registry.count(),
            "duration_ms": registry.parse_duration().as_millis(),
            "asn": registry.prefix().map(pen::Prefix::asn),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
