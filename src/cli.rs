use std::path::PathBuf;

mod find;
mod header;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use find::Find;
use header::Header;
use pen::{Config, Registry};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The downloaded registry file
    #[arg(short, long, default_value = "enterprise-numbers.txt", global = true)]
    file: PathBuf,

    /// Parser configuration (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let registry = self.load()?;
        self.command
            .unwrap_or_else(|| Command::Header(Header::default()))
            .run(&registry)
    }

    #[instrument(level = "debug", skip(self))]
    fn load(&self) -> anyhow::Result<Registry> {
        let config = match &self.config {
            Some(path) => Config::load(path).map_err(anyhow::Error::msg)?,
            None => Config::default(),
        };
        pen::load(&self.file, &config)
            .with_context(|| format!("Failed to parse {}", self.file.display()))
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show registry metadata (default)
    Header(Header),

    /// Look up a single entry
    Find(Find),
}

impl Command {
    fn run(self, registry: &Registry) -> anyhow::Result<()> {
        match self {
            Self::Header(command) => command.run(registry)?,
            Self::Find(command) => command.run(registry)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}
