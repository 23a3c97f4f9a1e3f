//! Global evento configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventoError, EventoResult};
use crate::store::EventStore;

static DEFAULT_DATA_FILE: &str = "events.data";
static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn is_default_data_file(p: &PathBuf) -> bool {
    *p == default_data_file()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn is_default_log_level(level: &String) -> bool {
    level == DEFAULT_LOG_LEVEL
}

/// Configuration at ~/.config/evento/config.toml
///
/// `EVENTO_DATA_FILE` and `EVENTO_LOG_LEVEL` override the file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventoConfig {
    /// Event file. Relative paths resolve against the working directory.
    #[serde(default = "default_data_file", skip_serializing_if = "is_default_data_file")]
    pub data_file: PathBuf,

    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default = "default_log_level", skip_serializing_if = "is_default_log_level")]
    pub log_level: String,
}

impl Default for EventoConfig {
    fn default() -> Self {
        EventoConfig {
            data_file: default_data_file(),
            log_level: default_log_level(),
        }
    }
}

impl EventoConfig {
    pub fn config_path() -> EventoResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventoError::Config("Could not determine config directory".into()))?
            .join("evento");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented default file first if missing.
    pub fn load() -> EventoResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (optional) layered under `EVENTO_*` environment variables.
    pub fn load_from(path: &Path) -> EventoResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("EVENTO"))
            .build()
            .map_err(|e| EventoError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventoError::Config(e.to_string()))
    }

    /// Event file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn store(&self) -> EventStore {
        EventStore::new(self.data_path())
    }

    /// Save the current config to ~/.config/evento/config.toml
    pub fn save(&self) -> EventoResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> EventoResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| EventoError::Config(e.to_string()))?;
        write_config(path, &content)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventoResult<()> {
        let contents = format!(
            "\
# evento configuration

# Where events are stored (relative to the working directory unless absolute):
# data_file = \"{}\"

# Log level when RUST_LOG is not set (error, warn, info, debug, trace):
# log_level = \"{}\"
",
            DEFAULT_DATA_FILE, DEFAULT_LOG_LEVEL
        );
        write_config(path, &contents)
    }
}

fn write_config(path: &Path, contents: &str) -> EventoResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            EventoError::Config(format!("Could not create config directory: {e}"))
        })?;
    }

    std::fs::write(path, contents)
        .map_err(|e| EventoError::Config(format!("Could not write config file: {e}")))
}
