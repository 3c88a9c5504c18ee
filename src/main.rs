//! Command line lookups against a downloaded IANA Private Enterprise Numbers
//! file.

use clap::Parser;

mod cli;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
