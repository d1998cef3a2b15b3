use std::path::PathBuf;

mod add;
mod find;
mod init;
mod list;
mod render;
mod shell;
mod terminal;

use anyhow::Context as _;
use clap::ArgAction;
use customers::{
    Config, Customer, LoadStatus, Loaded,
    storage::{self, SkippedLine},
};

/// Parse a free-text field (title or name) at the CLI boundary.
///
/// The record format does not escape its separator, so a semicolon in a
/// field would corrupt the data file.
fn parse_field(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("value must not be empty".to_string());
    }
    if s.contains(';') {
        return Err("value must not contain ';'".to_string());
    }
    Ok(s.to_string())
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The directory containing `customers.toml` and the data file
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// Use this data file instead of the one configured in the root
    #[arg(long, value_name = "PATH", global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let context = Context::new(self.root, self.data);
        self.command.unwrap_or(Command::Shell).run(context)
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
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive menu (default)
    Shell,

    /// Create a default configuration in the root directory
    Init(init::Command),

    /// Add a customer
    Add(add::Command),

    /// List customers, optionally sorted by name or filtered by type
    List(list::Command),

    /// Find a customer by id or by purchase number
    Find(find::Command),
}

impl Command {
    fn run(self, context: Context) -> anyhow::Result<()> {
        match self {
            Self::Shell => shell::Shell::open(context)?.run()?,
            Self::Init(command) => command.run(&context.root)?,
            Self::Add(command) => command.run(&context)?,
            Self::List(command) => command.run(&context)?,
            Self::Find(command) => command.run(&context)?,
        }
        Ok(())
    }
}

/// The configuration and data file resolved for this invocation.
#[derive(Debug)]
pub struct Context {
    root: PathBuf,
    config: Config,
    data_path: PathBuf,
}

impl Context {
    fn new(root: PathBuf, data: Option<PathBuf>) -> Self {
        let config = Config::load_or_default(&root);
        let data_path = data.unwrap_or_else(|| config.data_path(&root));
        tracing::debug!("Using data file {}", data_path.display());
        Self {
            root,
            config,
            data_path,
        }
    }

    fn load(&self) -> anyhow::Result<Loaded> {
        storage::load(&self.data_path)
            .with_context(|| format!("Failed to load customers from {}", self.data_path.display()))
    }

    /// Load the customers, treating a missing data file as empty.
    fn customers(&self) -> anyhow::Result<Vec<Customer>> {
        let loaded = self.load()?;
        if loaded.status == LoadStatus::NotFound {
            tracing::info!("No data file at {}", self.data_path.display());
        }
        Ok(loaded.customers)
    }

    /// Refuse to rewrite a data file that had lines we could not read.
    ///
    /// Saving writes only the parsed customers, so those lines would be lost.
    fn ensure_rewritable(&self, skipped: &[SkippedLine]) -> anyhow::Result<()> {
        if skipped.is_empty() {
            return Ok(());
        }
        let lines = skipped
            .iter()
            .map(|line| line.line_number.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::bail!(
            "Refusing to rewrite {}: unreadable line(s) {lines} would be lost. Fix or remove them first.",
            self.data_path.display()
        )
    }

    fn save(&self, customers: &[Customer]) -> anyhow::Result<()> {
        storage::save(&self.data_path, customers)
            .with_context(|| format!("Failed to save customers to {}", self.data_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::parse_field;

    #[test]
    fn parse_field_accepts_plain_text() {
        assert_eq!(parse_field("Alan Turing"), Ok("Alan Turing".to_string()));
    }

    #[test]
    fn parse_field_rejects_empty_and_separator() {
        assert!(parse_field("").is_err());
        assert!(parse_field("Smith;Jones").is_err());
    }
}
