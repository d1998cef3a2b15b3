use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for customer management.
///
/// This struct holds settings that control where customer records are
/// persisted and when they are written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The path of the customer data file.
    ///
    /// Relative paths are resolved against the directory containing the
    /// configuration (see [`Config::data_path`]).
    data_file: PathBuf,

    /// Whether the interactive shell saves the collection when it exits.
    pub save_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            save_on_exit: true,
        }
    }
}

impl Config {
    /// The conventional file name of the configuration within a root
    /// directory.
    pub const FILE_NAME: &'static str = "customers.toml";

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

    /// Loads the configuration from `root`, falling back to the defaults if
    /// it is missing or invalid.
    ///
    /// An invalid file is logged as a warning, since the defaults may point
    /// at a different data file.
    #[must_use]
    pub fn load_or_default(root: &Path) -> Self {
        let path = root.join(Self::FILE_NAME);
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        Self::load(&path).unwrap_or_else(|e| {
            tracing::warn!("{e} ({}); using defaults", path.display());
            Self::default()
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the configured data file, as written in the configuration.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Sets the data file.
    pub fn set_data_file(&mut self, path: impl Into<PathBuf>) {
        self.data_file = path.into();
    }

    /// Returns the data file path resolved against `root`.
    ///
    /// Absolute paths are returned unchanged.
    #[must_use]
    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.data_file)
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/customers.txt")
}

const fn default_save_on_exit() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_data_file")]
        data_file: PathBuf,

        #[serde(default = "default_save_on_exit")]
        save_on_exit: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                data_file,
                save_on_exit,
            } => Self {
                data_file,
                save_on_exit,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            data_file: config.data_file,
            save_on_exit: config.save_on_exit,
        }
    }
}
