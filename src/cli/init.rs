use std::{fs, path::Path};

use customers::Config;
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Data file location, relative to the root (default: data/customers.txt)
    #[arg(long, value_name = "PATH")]
    data_file: Option<String>,

    /// Do not save automatically when leaving the interactive menu
    #[arg(long)]
    no_save_on_exit: bool,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config_path = root.join(Config::FILE_NAME);
        if config_path.exists() {
            anyhow::bail!(
                "Already initialized (found existing {})",
                config_path.display()
            );
        }

        fs::create_dir_all(root)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", root.display()))?;

        let mut config = Config::default();
        if let Some(data_file) = self.data_file {
            config.set_data_file(data_file);
        }
        config.save_on_exit = !self.no_save_on_exit;
        config
            .save(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", Config::FILE_NAME))?;

        let data_path = config.data_path(root);
        if let Some(parent) = data_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create data directory: {e}"))?;
        }

        println!(
            "{}",
            format!("✅ Initialized customer records in {}", root.display()).success()
        );
        println!("  Created: {}", Config::FILE_NAME);
        println!("  Data file: {}", config.data_file().display());
        println!();
        println!("Next steps:");
        println!("  cust add --id 1 --title Mr --name \"Your First Customer\"");

        Ok(())
    }
}
